//! Decorator Pattern
//!
//! Wraps a [`Clothes`] value in garment layers. Every layer asks the layer
//! beneath it to dress first and then adds its own garment, so the narration
//! always runs from the innermost layer outwards.

use crate::console::Console;

pub trait Clothes {
    fn put_on(&self, out: &mut dyn Console);
}

impl<T: Clothes + ?Sized> Clothes for &T {
    fn put_on(&self, out: &mut dyn Console) {
        (**self).put_on(out);
    }
}

impl<T: Clothes + ?Sized> Clothes for Box<T> {
    fn put_on(&self, out: &mut dyn Console) {
        (**self).put_on(out);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Human;

impl Clothes for Human {
    fn put_on(&self, out: &mut dyn Console) {
        out.say("I am naked 👀 Woohoo!");
    }
}

macro_rules! garment {
    ($($garment:ident => $line:literal),+ $(,)?) => {
        $(
            #[derive(Debug, Clone)]
            pub struct $garment<C> {
                inner: C,
            }

            impl<C: Clothes> $garment<C> {
                pub fn new(inner: C) -> Self {
                    Self { inner }
                }

                pub fn into_inner(self) -> C {
                    self.inner
                }
            }

            impl<C: Clothes> Clothes for $garment<C> {
                fn put_on(&self, out: &mut dyn Console) {
                    self.inner.put_on(out);
                    out.say($line);
                }
            }
        )+
    };
}

garment! {
    Shorts => "Putting shorts on",
    Trousers => "Putting trousers on",
    Shirt => "Putting shirt on",
    Socks => "Putting socks on",
}

/// Fluent layering: `Human.with_shorts().with_shirt()`.
pub trait ClothesExt: Clothes + Sized {
    fn with_shorts(self) -> Shorts<Self> {
        Shorts::new(self)
    }

    fn with_trousers(self) -> Trousers<Self> {
        Trousers::new(self)
    }

    fn with_shirt(self) -> Shirt<Self> {
        Shirt::new(self)
    }

    fn with_socks(self) -> Socks<Self> {
        Socks::new(self)
    }

    fn boxed<'a>(self) -> Box<dyn Clothes + 'a>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<T: Clothes> ClothesExt for T {}

// ============================================================================
// Demo
// ============================================================================

pub fn demo(out: &mut dyn Console) {
    let me = Human;

    out.say("Just me:");
    me.put_on(out);

    out.blank();
    out.say("One garment at a time:");
    Shorts::new(&me).put_on(out);
    Trousers::new(&me).put_on(out);
    Shirt::new(&me).put_on(out);
    Socks::new(&me).put_on(out);

    out.blank();
    out.say("Layered:");
    let shorts = Shorts::new(&me);
    Trousers::new(&shorts).put_on(out);
    let shorts_and_shirt = Shirt::new(&shorts);
    shorts_and_shirt.put_on(out);

    out.blank();
    out.say("Fully dressed:");
    let dressed = (&shorts_and_shirt).with_trousers().with_socks();
    dressed.put_on(out);

    out.blank();
    out.say("Decided at runtime:");
    let mut outfit: Box<dyn Clothes> = Box::new(me);
    for layer in ["shorts", "shirt"] {
        outfit = match layer {
            "shorts" => outfit.with_shorts().boxed(),
            _ => outfit.with_shirt().boxed(),
        };
    }
    outfit.put_on(out);
}

// ============================================================================
// Tests
// ============================================================================
