#[cfg(test)]
pub mod impl_fake;
pub mod impl_imageproc;
pub mod interface;
