use crate::core::codec;
use crate::domain::model::{BatchReport, SerialReport};
use crate::utils::error::Result;
use rand::Rng;

pub struct SerialEngine<R: Rng> {
    rng: R,
}

impl<R: Rng> SerialEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn run(&mut self, count: usize) -> Result<BatchReport> {
        let mut reports = Vec::with_capacity(count);

        for _ in 0..count {
            let serial = codec::generate_with(&mut self.rng).to_string();

            // 每個序號生成後立即回驗，作為自我檢查
            let valid = codec::validate(&serial);
            tracing::debug!("Generated serial: {} (valid: {})", serial, valid);

            reports.push(SerialReport { serial, valid });
        }

        let all_valid = reports.iter().all(|r| r.valid);
        Ok(BatchReport { reports, all_valid })
    }
}
