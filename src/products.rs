//! Products

use std::fmt;

use rand::{
    Rng, SeedableRng,
    rngs::{OsRng, StdRng},
};
use thiserror::Error;

use crate::{expenses::CostSet, money::Money};

/// Name given to products created without one.
pub const UNNAMED_PRODUCT: &str = "Unnamed Product";

/// Errors that can occur while creating a product.
#[derive(Debug, Error)]
pub enum ProductError {
    /// The operating system entropy source could not seed the UPC generator.
    #[error("failed to generate UPC: {0}")]
    Entropy(#[from] rand::Error),
}

/// A six digit Universal Product Code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Upc(u64);

impl Upc {
    /// Smallest generated UPC.
    pub const MIN: u64 = 100_000;

    /// Largest generated UPC.
    pub const MAX: u64 = 999_999;

    /// Use `value` as the UPC, or generate a fresh one if it is shorter than six digits.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::Entropy`] if a UPC has to be generated and the OS entropy source
    /// is unavailable.
    pub fn new(value: i64) -> Result<Self, ProductError> {
        match Self::parse(value) {
            Some(upc) => Ok(upc),
            None => Ok(Self::generate(&mut StdRng::from_rng(OsRng)?)),
        }
    }

    /// Like [`Upc::new`] but draws replacement UPCs from `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(value: i64, rng: &mut R) -> Self {
        Self::parse(value).unwrap_or_else(|| Self::generate(rng))
    }

    /// Generate a random UPC in `MIN..=MAX`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }

    /// The numeric code.
    pub fn value(self) -> u64 {
        self.0
    }

    fn parse(value: i64) -> Option<Self> {
        u64::try_from(value)
            .ok()
            .filter(|value| *value >= Self::MIN)
            .map(Self)
    }
}

impl fmt::Display for Upc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    upc: Upc,
    price: Money,
    costs: CostSet,
}

impl Product {
    /// Create a new product.
    ///
    /// An empty name is replaced with [`UNNAMED_PRODUCT`] and a UPC shorter than six digits is
    /// replaced with a random one.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::Entropy`] if a replacement UPC cannot be generated.
    pub fn new(
        name: impl Into<String>,
        upc: i64,
        price: Money,
        costs: CostSet,
    ) -> Result<Self, ProductError> {
        Ok(Self::with_upc(name, Upc::new(upc)?, price, costs))
    }

    /// Create a new product with an already validated UPC.
    pub fn with_upc(name: impl Into<String>, upc: Upc, price: Money, costs: CostSet) -> Self {
        let mut name = name.into();

        if name.is_empty() {
            name = UNNAMED_PRODUCT.to_string();
        }

        Self {
            name,
            upc,
            price,
            costs,
        }
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product UPC
    pub fn upc(&self) -> Upc {
        self.upc
    }

    /// Starting price
    pub fn price(&self) -> Money {
        self.price
    }

    /// Product expenses
    pub fn costs(&self) -> &CostSet {
        &self.costs
    }
}
