use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfilerTimes {
    pub pre_process: Duration,
    pub network: Duration,
    pub post_process: Duration,
}

impl ProfilerTimes {
    pub fn total(&self) -> Duration {
        self.pre_process + self.network + self.post_process
    }

    pub fn fps(&self) -> f32 {
        let total = self.total().as_secs_f32();
        if total > 0.0 {
            1.0 / total
        } else {
            0.0
        }
    }

    pub fn report(&self, network_name: &str) -> Vec<String> {
        vec![
            format!("Timing Report {}", network_name),
            format!("Pre-Process   {:.5}ms", millis(self.pre_process)),
            format!("Network       {:.5}ms", millis(self.network)),
            format!("Post-Process  {:.5}ms", millis(self.post_process)),
            format!("Total         {:.5}ms", millis(self.total())),
        ]
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
