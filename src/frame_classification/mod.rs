pub mod format;
pub mod main;
pub mod process_frame;
pub mod run;
#[cfg(test)]
mod tests;
