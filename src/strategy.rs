//! Strategy Pattern
//!
//! [`ExtractDataService`] holds one [`ExtractStrategy`] at a time and runs
//! whichever it currently holds. Strategies are swapped at runtime with
//! `set_strategy`; the previous one is dropped.

use std::fmt;

use itertools::Itertools;

use crate::console::Console;

pub const SAMPLE_DATA: [&str; 5] = ["c", "e", "a", "d", "b"];

pub trait ExtractStrategy {
    fn name(&self) -> &'static str;
    fn extract_data(&self, data: &[String]) -> Vec<String>;
}

/// Sorts ascending.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoomDataStrategy;

impl ExtractStrategy for RoomDataStrategy {
    fn name(&self) -> &'static str {
        "RoomDataStrategy"
    }

    fn extract_data(&self, data: &[String]) -> Vec<String> {
        data.iter().cloned().sorted().collect()
    }
}

/// Reverses input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeskDataStrategy;

impl ExtractStrategy for DeskDataStrategy {
    fn name(&self) -> &'static str {
        "DeskDataStrategy"
    }

    fn extract_data(&self, data: &[String]) -> Vec<String> {
        data.iter().rev().cloned().collect()
    }
}

/// Sorts descending.
#[derive(Debug, Default, Clone, Copy)]
pub struct SensorDataStrategy;

impl ExtractStrategy for SensorDataStrategy {
    fn name(&self) -> &'static str {
        "SensorDataStrategy"
    }

    fn extract_data(&self, data: &[String]) -> Vec<String> {
        data.iter().cloned().sorted().rev().collect()
    }
}

pub struct ExtractDataService {
    strategy: Box<dyn ExtractStrategy>,
}

impl ExtractDataService {
    pub fn new(strategy: Box<dyn ExtractStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn ExtractStrategy>) {
        tracing::debug!(from = self.strategy.name(), to = strategy.name(), "strategy swapped");
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn extract(&self, data: &[String]) -> Vec<String> {
        self.strategy.extract_data(data)
    }

    pub fn do_some_business_logic(&self, data: &[String], out: &mut dyn Console) -> Vec<String> {
        out.say(&format!(
            "ExtractDataService: extracting data using {} strategy (not sure how it'll do it)",
            self.strategy.name()
        ));
        let result = self.extract(data);
        out.say(&result.join(","));
        result
    }
}

impl fmt::Debug for ExtractDataService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractDataService")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

pub fn demo(data: &[String], out: &mut dyn Console) {
    let mut service = ExtractDataService::new(Box::new(RoomDataStrategy));
    out.say("Client: Strategy is set to RoomDataStrategy.");
    service.do_some_business_logic(data, out);

    out.blank();
    out.say("Client: Strategy is set to DeskDataStrategy.");
    service.set_strategy(Box::new(DeskDataStrategy));
    service.do_some_business_logic(data, out);

    out.blank();
    out.say("Client: Strategy is set to SensorDataStrategy.");
    service.set_strategy(Box::new(SensorDataStrategy));
    service.do_some_business_logic(data, out);
}
