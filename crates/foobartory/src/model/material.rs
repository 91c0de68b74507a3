use super::Serial;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The raw materials robots mine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Foo,
    Bar,
}

impl Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Material::Foo => "foo",
            Material::Bar => "bar",
        };
        f.write_str(name)
    }
}

/// A mined foo.
///
/// Only the inventory mints units, and they are neither `Clone` nor deserializable: whoever
/// holds a `Foo` holds the only one with that serial.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Foo {
    serial: Serial,
}

impl Foo {
    pub(crate) fn minted(serial: Serial) -> Self {
        Self { serial }
    }

    pub fn serial(&self) -> Serial {
        self.serial
    }
}

impl Display for Foo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "foo {}", self.serial)
    }
}

/// A mined bar. Survives a failed assembly and goes back to stock.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Bar {
    serial: Serial,
}

impl Bar {
    pub(crate) fn minted(serial: Serial) -> Self {
        Self { serial }
    }

    pub fn serial(&self) -> Serial {
        self.serial
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bar {}", self.serial)
    }
}

/// An assembled foobar, carrying the serials of the foo and bar it was built from.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Foobar {
    foo: Serial,
    bar: Serial,
}

impl Foobar {
    /// Consumes both parts.
    pub fn assemble(foo: Foo, bar: Bar) -> Self {
        Self {
            foo: foo.serial,
            bar: bar.serial,
        }
    }

    pub fn foo(&self) -> Serial {
        self.foo
    }

    pub fn bar(&self) -> Serial {
        self.bar
    }
}

impl Display for Foobar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "foobar [foo {} + bar {}]", self.foo, self.bar)
    }
}
