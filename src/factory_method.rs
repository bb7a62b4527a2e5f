//! Factory Method Pattern
//!
//! A [`ToyFactory`] declares `create_toy` and builds its real work,
//! `some_operation`, on top of it. Concrete factories only decide which
//! [`Toy`] gets made; callers see nothing but the two traits.

use std::fmt;
use std::str::FromStr;

use crate::console::Console;
use crate::error::PatternError;

pub trait Toy {
    fn operate(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Doll;

impl Toy for Doll {
    fn operate(&self) -> String {
        "{Doll is operating}".to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Car;

impl Toy for Car {
    fn operate(&self) -> String {
        "{Car is operating}".to_string()
    }
}

pub trait ToyFactory {
    fn create_toy(&self) -> Box<dyn Toy>;

    /// Works with whatever toy the factory method hands back.
    fn some_operation(&self) -> String {
        let toy = self.create_toy();
        format!(
            "ToyFactory: The same toyFactory's code has just worked with {}",
            toy.operate()
        )
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KafiToys;

impl ToyFactory for KafiToys {
    fn create_toy(&self) -> Box<dyn Toy> {
        Box::new(Doll)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimbaSmobyToys;

impl ToyFactory for SimbaSmobyToys {
    fn create_toy(&self) -> Box<dyn Toy> {
        Box::new(Car)
    }
}

// ============================================================================
// Selecting a factory by name
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToyMaker {
    Kafi,
    SimbaSmoby,
}

impl ToyMaker {
    pub const ALL: [ToyMaker; 2] = [ToyMaker::Kafi, ToyMaker::SimbaSmoby];

    pub fn name(self) -> &'static str {
        match self {
            ToyMaker::Kafi => "kafi",
            ToyMaker::SimbaSmoby => "simba-smoby",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToyMaker::Kafi => "KafiToys",
            ToyMaker::SimbaSmoby => "SimbaSmobyToys",
        }
    }

    pub fn factory(self) -> Box<dyn ToyFactory> {
        match self {
            ToyMaker::Kafi => Box::new(KafiToys),
            ToyMaker::SimbaSmoby => Box::new(SimbaSmobyToys),
        }
    }
}

impl fmt::Display for ToyMaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToyMaker {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|maker| maker.name() == wanted || maker.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|m| m.name()).collect();
                PatternError::unknown_toy_factory(s, &names)
            })
    }
}

pub fn client_code(factory: &dyn ToyFactory, out: &mut dyn Console) {
    out.say("Client: I'm not aware of the toyFactory's class, but it still works.");
    out.say(&factory.some_operation());
}

// ============================================================================
// Demo
// ============================================================================

pub fn demo(maker: ToyMaker, out: &mut dyn Console) {
    out.say(&format!("App: Launched with the {}.", maker.label()));
    client_code(maker.factory().as_ref(), out);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_each_factory_picks_its_product() {
        assert_eq!(KafiToys.create_toy().operate(), "{Doll is operating}");
        assert_eq!(SimbaSmobyToys.create_toy().operate(), "{Car is operating}");
    }

    #[test]
    fn test_template_operation_uses_factory_method() {
        assert_eq!(
            SimbaSmobyToys.some_operation(),
            "ToyFactory: The same toyFactory's code has just worked with {Car is operating}"
        );
    }

    #[test]
    fn test_client_code_only_sees_the_trait() {
        let factories: Vec<Box<dyn ToyFactory>> = vec![Box::new(KafiToys), Box::new(SimbaSmobyToys)];
        let mut out = Transcript::new();
        for factory in &factories {
            client_code(factory.as_ref(), &mut out);
        }
        assert_eq!(out.lines().len(), 4);
        assert!(out.contains("{Doll is operating}"));
        assert!(out.contains("{Car is operating}"));
    }

    #[test]
    fn test_maker_parsing() {
        assert_eq!("kafi".parse::<ToyMaker>().unwrap(), ToyMaker::Kafi);
        assert_eq!("Simba_Smoby".parse::<ToyMaker>().unwrap(), ToyMaker::SimbaSmoby);
        assert_eq!("SimbaSmobyToys".parse::<ToyMaker>().unwrap(), ToyMaker::SimbaSmoby);
        assert!(matches!(
            "lego".parse::<ToyMaker>(),
            Err(PatternError::UnknownToyFactory { .. })
        ));
    }

    #[test]
    fn test_demo_announces_factory() {
        let mut out = Transcript::new();
        demo(ToyMaker::SimbaSmoby, &mut out);
        assert_eq!(
            out.lines()[0],
            "App: Launched with the SimbaSmobyToys."
        );
        assert!(out.last().unwrap().ends_with("{Car is operating}"));
    }
}
