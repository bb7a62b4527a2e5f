//! Catalog of runnable demos.

use std::fmt;
use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;

use colored::Colorize;

use crate::config::PatternsConfig;
use crate::console::{self, Console, Stdout};
use crate::error::{PatternError, Result};
use crate::factory_method::ToyMaker;
use crate::telemetry;
use crate::{adapter, bridge, builder, command, decorator, factory_method, singleton, strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Demo {
    Adapter,
    Bridge,
    Builder,
    Command,
    Decorator,
    FactoryMethod,
    Singleton,
    Strategy,
}

impl Demo {
    pub const ALL: [Demo; 8] = [
        Demo::Builder,
        Demo::FactoryMethod,
        Demo::Singleton,
        Demo::Adapter,
        Demo::Bridge,
        Demo::Decorator,
        Demo::Command,
        Demo::Strategy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Adapter => "adapter",
            Demo::Bridge => "bridge",
            Demo::Builder => "builder",
            Demo::Command => "command",
            Demo::Decorator => "decorator",
            Demo::FactoryMethod => "factory-method",
            Demo::Singleton => "singleton",
            Demo::Strategy => "strategy",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Adapter => "Adapter Pattern",
            Demo::Bridge => "Bridge Pattern",
            Demo::Builder => "Builder Pattern",
            Demo::Command => "Command Pattern",
            Demo::Decorator => "Decorator Pattern",
            Demo::FactoryMethod => "Factory Method Pattern",
            Demo::Singleton => "Singleton Pattern",
            Demo::Strategy => "Strategy Pattern",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Demo::Adapter => {
                "Provides a unified interface that allows objects with incompatible interfaces to collaborate."
            }
            Demo::Bridge => {
                "Splits a set of closely related types into an abstraction and an implementation that evolve independently."
            }
            Demo::Builder => "Constructs complex objects step by step, reusing the same construction code.",
            Demo::Command => "Turns a request into a stand-alone object so it can be queued, recorded and undone.",
            Demo::Decorator => "Attaches new behavior to objects by placing them inside wrapper objects.",
            Demo::FactoryMethod => "Lets implementors decide which product type a creator builds.",
            Demo::Singleton => "Ensures a type has only one instance and provides a global access point to it.",
            Demo::Strategy => "Defines a family of interchangeable algorithms behind one interface.",
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|demo| demo.name() == wanted)
            .ok_or_else(|| PatternError::UnknownDemo(s.to_string()))
    }
}

/// What `patterns run` was asked for: one demo or the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunTarget {
    All,
    One(Demo),
}

impl RunTarget {
    /// `None` means every demo.
    pub fn demo(self) -> Option<Demo> {
        match self {
            RunTarget::All => None,
            RunTarget::One(demo) => Some(demo),
        }
    }
}

impl FromStr for RunTarget {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(RunTarget::All)
        } else {
            s.parse().map(RunTarget::One)
        }
    }
}

pub fn run(demo: Demo, config: &PatternsConfig, out: &mut dyn Console) -> Result<()> {
    tracing::info!(demo = demo.name(), "running demo");
    match demo {
        Demo::Adapter => adapter::demo(out),
        Demo::Bridge => bridge::demo(out),
        Demo::Builder => builder::demo(out),
        Demo::Command => command::demo(out),
        Demo::Decorator => decorator::demo(out),
        Demo::FactoryMethod => {
            let maker: ToyMaker = config.factory.creator.parse()?;
            factory_method::demo(maker, out);
        }
        Demo::Singleton => singleton::demo(out),
        Demo::Strategy => strategy::demo(&config.strategy.data, out),
    }
    Ok(())
}

pub fn run_titled(demo: Demo, config: &PatternsConfig, out: &mut dyn Console) -> Result<()> {
    out.heading(demo.title());
    out.say(demo.summary());
    out.blank();
    run(demo, config, out)
}

/// Runs every demo in catalog order. Stops at the first failing one.
pub fn run_all(config: &PatternsConfig, out: &mut dyn Console) -> Result<()> {
    for (i, demo) in Demo::ALL.into_iter().enumerate() {
        if i > 0 {
            out.blank();
        }
        run_titled(demo, config, out)?;
    }
    Ok(())
}

/// Shared entry point for the binaries. `None` runs the whole catalog.
pub fn launch(demo: Option<Demo>, config_path: Option<&Path>, verbose: u8, no_color: bool) -> ExitCode {
    console::apply_color(!no_color);
    let config = match PatternsConfig::discover(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    telemetry::init(&telemetry::level_for_verbosity(&config.logging.level, verbose));

    let color = config.console.color && !no_color;
    console::apply_color(color);
    let mut out = Stdout::new(color);
    let result = match demo {
        Some(demo) => run_titled(demo, &config, &mut out),
        None => run_all(&config, &mut out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "demo failed");
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for demo in Demo::ALL {
            assert_eq!(demo.name().parse::<Demo>().unwrap(), demo);
        }
        assert_eq!("factory_method".parse::<Demo>().unwrap(), Demo::FactoryMethod);
    }

    #[test]
    fn test_unknown_demo() {
        assert!(matches!(
            "visitor".parse::<Demo>(),
            Err(PatternError::UnknownDemo(name)) if name == "visitor"
        ));
    }

    #[test]
    fn test_run_target_accepts_all() {
        assert_eq!("all".parse::<RunTarget>().unwrap(), RunTarget::All);
        assert_eq!(" ALL ".parse::<RunTarget>().unwrap().demo(), None);
        assert_eq!(
            "bridge".parse::<RunTarget>().unwrap(),
            RunTarget::One(Demo::Bridge)
        );
        assert!(matches!(
            "everything".parse::<RunTarget>(),
            Err(PatternError::UnknownDemo(_))
        ));
    }

    #[test]
    fn test_factory_demo_follows_config() {
        let mut config = PatternsConfig::default();
        config.factory.creator = "kafi".to_string();

        let mut out = Transcript::new();
        run(Demo::FactoryMethod, &config, &mut out).unwrap();
        assert!(out.contains("{Doll is operating}"));
    }

    #[test]
    fn test_bad_factory_config_fails_the_demo() {
        let mut config = PatternsConfig::default();
        config.factory.creator = "lego".to_string();

        let mut out = Transcript::new();
        let result = run(Demo::FactoryMethod, &config, &mut out);
        assert!(matches!(result, Err(PatternError::UnknownToyFactory { .. })));
    }

    #[test]
    fn test_strategy_demo_uses_configured_data() {
        let mut config = PatternsConfig::default();
        config.strategy.data = vec!["y".to_string(), "x".to_string(), "z".to_string()];

        let mut out = Transcript::new();
        run(Demo::Strategy, &config, &mut out).unwrap();
        assert!(out.contains("x,y,z"));
        assert!(out.contains("z,x,y"));
    }

    #[test]
    fn test_run_all_prints_every_heading() {
        let mut out = Transcript::new();
        run_all(&PatternsConfig::default(), &mut out).unwrap();
        for demo in Demo::ALL {
            assert!(out.contains(&format!("=== {} ===", demo.title())));
        }
    }
}
