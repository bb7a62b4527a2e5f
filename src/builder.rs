//! Builder Pattern
//!
//! Restaurants are builders that add one ingredient per call and hand back
//! the finished [`Burger`] through `get_burger`, which also resets them for
//! the next order. A [`FastFoodWorker`] is the director: it knows two fixed
//! recipes and works against whichever restaurant it is currently assigned to.

use std::fmt;
use std::mem;

use crate::console::Console;

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Burger {
    chain: &'static str,
    ingredients: Vec<String>,
}

impl Burger {
    pub fn new(chain: &'static str) -> Self {
        Self {
            chain,
            ingredients: Vec::new(),
        }
    }

    pub fn chain(&self) -> &'static str {
        self.chain
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    fn push(&mut self, ingredient: String) {
        self.ingredients.push(ingredient);
    }

    pub fn list_parts(&self) -> String {
        format!(
            "{} burger ingredients: {}",
            self.chain,
            self.ingredients.join(", ")
        )
    }
}

impl fmt::Display for Burger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.list_parts())
    }
}

// ============================================================================
// Builders
// ============================================================================

pub trait BurgerBuilder {
    fn add_bun(&mut self);
    fn add_burger(&mut self);
    fn add_cheese(&mut self);
}

#[derive(Debug, Clone)]
pub struct McDonaldsRestaurant {
    burger: Burger,
}

#[derive(Debug, Clone)]
pub struct KfcRestaurant {
    burger: Burger,
}

// Both chains share the same steps and only differ in their labels.
// The ingredient label is spelled separately from the chain name.
macro_rules! restaurant {
    ($restaurant:ident, $chain:literal, $label:literal) => {
        impl $restaurant {
            pub const CHAIN: &'static str = $chain;
            pub const LABEL: &'static str = $label;

            pub fn new() -> Self {
                Self {
                    burger: Burger::new(Self::CHAIN),
                }
            }

            pub fn reset(&mut self) {
                self.burger = Burger::new(Self::CHAIN);
            }

            /// Hands over the burger built so far and starts a fresh one.
            pub fn get_burger(&mut self) -> Burger {
                let burger = mem::replace(&mut self.burger, Burger::new(Self::CHAIN));
                tracing::debug!(
                    chain = Self::CHAIN,
                    ingredients = burger.ingredients.len(),
                    "burger handed over, builder reset"
                );
                burger
            }
        }

        impl Default for $restaurant {
            fn default() -> Self {
                Self::new()
            }
        }

        impl BurgerBuilder for $restaurant {
            fn add_bun(&mut self) {
                self.burger.push(format!("{} Bun added🥖", Self::LABEL));
            }

            fn add_burger(&mut self) {
                self.burger.push(format!("{} burger added🥩", Self::LABEL));
            }

            fn add_cheese(&mut self) {
                self.burger.push(format!("{} cheese added🧀", Self::LABEL));
            }
        }
    };
}

restaurant!(McDonaldsRestaurant, "McDonalds", "Mcdonalds");
restaurant!(KfcRestaurant, "KFC", "KFC");

// ============================================================================
// Director
// ============================================================================

pub struct FastFoodWorker<'a> {
    restaurant: &'a mut dyn BurgerBuilder,
}

impl<'a> FastFoodWorker<'a> {
    pub fn new(restaurant: &'a mut dyn BurgerBuilder) -> Self {
        Self { restaurant }
    }

    pub fn change_restaurant(&mut self, restaurant: &'a mut dyn BurgerBuilder) {
        self.restaurant = restaurant;
    }

    pub fn build_minimal_burger(&mut self) {
        self.restaurant.add_bun();
    }

    pub fn build_full_burger(&mut self) {
        self.restaurant.add_bun();
        self.restaurant.add_burger();
        self.restaurant.add_cheese();
    }
}

impl fmt::Debug for FastFoodWorker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastFoodWorker").finish_non_exhaustive()
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn demo(out: &mut dyn Console) {
    let mut leeds_mcdonalds = McDonaldsRestaurant::new();
    let mut wakefield_kfc = KfcRestaurant::new();
    let mut huddersfield_kfc = KfcRestaurant::new();

    out.say("Standard basic McDonalds burger:");
    FastFoodWorker::new(&mut leeds_mcdonalds).build_minimal_burger();
    out.say(&leeds_mcdonalds.get_burger().list_parts());

    out.say("Standard full McDonalds burger:");
    FastFoodWorker::new(&mut leeds_mcdonalds).build_full_burger();
    out.say(&leeds_mcdonalds.get_burger().list_parts());

    // Builders work without a director too.
    out.say("Custom McDonalds burger:");
    leeds_mcdonalds.add_bun();
    leeds_mcdonalds.add_burger();
    out.say(&leeds_mcdonalds.get_burger().list_parts());

    out.say("Standard basic KFC burger:");
    {
        let mut jane = FastFoodWorker::new(&mut huddersfield_kfc);
        jane.change_restaurant(&mut wakefield_kfc);
        jane.build_minimal_burger();
    }
    out.say(&wakefield_kfc.get_burger().list_parts());

    out.say("Standard full KFC burger:");
    FastFoodWorker::new(&mut huddersfield_kfc).build_full_burger();
    out.say(&huddersfield_kfc.get_burger().list_parts());

    out.say("Custom KFC burger:");
    wakefield_kfc.add_bun();
    wakefield_kfc.add_burger();
    out.say(&wakefield_kfc.get_burger().list_parts());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use proptest::prelude::*;

    #[test]
    fn test_minimal_recipe_is_one_bun() {
        let mut restaurant = McDonaldsRestaurant::new();
        FastFoodWorker::new(&mut restaurant).build_minimal_burger();
        let burger = restaurant.get_burger();
        assert_eq!(burger.ingredients(), ["Mcdonalds Bun added🥖"]);
        assert_eq!(
            burger.list_parts(),
            "McDonalds burger ingredients: Mcdonalds Bun added🥖"
        );
    }

    #[test]
    fn test_full_recipe_keeps_step_order() {
        let mut restaurant = KfcRestaurant::new();
        FastFoodWorker::new(&mut restaurant).build_full_burger();
        assert_eq!(
            restaurant.get_burger().list_parts(),
            "KFC burger ingredients: KFC Bun added🥖, KFC burger added🥩, KFC cheese added🧀"
        );
    }

    #[test]
    fn test_get_burger_resets_builder() {
        let mut restaurant = KfcRestaurant::new();
        restaurant.add_cheese();
        let first = restaurant.get_burger();
        let second = restaurant.get_burger();

        assert_eq!(first.ingredients().len(), 1);
        assert!(second.is_empty());
        assert_eq!(second.chain(), "KFC");
    }

    #[test]
    fn test_reset_discards_pending_ingredients() {
        let mut restaurant = McDonaldsRestaurant::new();
        restaurant.add_bun();
        restaurant.reset();
        assert!(restaurant.get_burger().is_empty());
    }

    #[test]
    fn test_change_restaurant_redirects_director() {
        let mut first = McDonaldsRestaurant::new();
        let mut second = KfcRestaurant::new();
        {
            let mut worker = FastFoodWorker::new(&mut first);
            worker.build_minimal_burger();
            worker.change_restaurant(&mut second);
            worker.build_full_burger();
        }
        assert_eq!(first.get_burger().ingredients().len(), 1);
        assert_eq!(second.get_burger().ingredients().len(), 3);
    }

    #[test]
    fn test_demo_prints_six_burgers() {
        let mut out = Transcript::new();
        demo(&mut out);
        let burgers = out
            .lines()
            .iter()
            .filter(|line| line.contains("burger ingredients:"))
            .count();
        assert_eq!(burgers, 6);
        assert!(out.contains("KFC burger ingredients: KFC Bun added🥖, KFC burger added🥩"));
    }

    #[derive(Debug, Clone, Copy)]
    enum Step {
        Bun,
        Patty,
        Cheese,
    }

    proptest! {
        #[test]
        fn test_burger_holds_exactly_steps_since_last_order(
            before in prop::collection::vec(prop_oneof![Just(Step::Bun), Just(Step::Patty), Just(Step::Cheese)], 0..10),
            after in prop::collection::vec(prop_oneof![Just(Step::Bun), Just(Step::Patty), Just(Step::Cheese)], 0..10),
        ) {
            let mut restaurant = McDonaldsRestaurant::new();
            let apply = |restaurant: &mut McDonaldsRestaurant, steps: &[Step]| {
                for step in steps {
                    match step {
                        Step::Bun => restaurant.add_bun(),
                        Step::Patty => restaurant.add_burger(),
                        Step::Cheese => restaurant.add_cheese(),
                    }
                }
            };

            apply(&mut restaurant, &before);
            let _ = restaurant.get_burger();
            apply(&mut restaurant, &after);
            let burger = restaurant.get_burger();

            prop_assert_eq!(burger.ingredients().len(), after.len());
            for (ingredient, step) in burger.ingredients().iter().zip(&after) {
                let expected = match step {
                    Step::Bun => "Bun",
                    Step::Patty => "burger added",
                    Step::Cheese => "cheese",
                };
                prop_assert!(ingredient.contains(expected));
            }
        }
    }
}
