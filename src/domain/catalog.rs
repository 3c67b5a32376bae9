use super::item::Item;
use super::money::Money;
use crate::error::{Result, VendingError};
use std::fmt;

/// Ordered collection of items addressed by 1-based selection numbers.
///
/// Item names are unique. Selection numbers are stable because items are
/// only ever appended.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new item and returns its selection number.
    ///
    /// Prices must be whole cents between zero and [`Money::MAX`], so the
    /// amount shown to a buyer is exactly the amount charged.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Result<usize> {
        if price.is_negative() || price > Money::MAX || !price.is_whole_cents() {
            return Err(VendingError::InvalidPrice(price.value()));
        }
        let name = name.into();
        if self.items.iter().any(|item| item.name() == name) {
            return Err(VendingError::DuplicateItem(name));
        }
        self.items.push(Item::new(name, price, quantity));
        Ok(self.items.len())
    }

    /// Adds `delta` units to an item and returns the new quantity.
    pub fn restock(&mut self, selection: usize, delta: i64) -> Result<u32> {
        if delta < 0 {
            return Err(VendingError::NegativeRestock(delta));
        }
        let delta = u32::try_from(delta).map_err(|_| VendingError::InvalidInput {
            field: "quantity",
            value: delta.to_string(),
        })?;
        let item = self.item_mut(selection)?;
        item.add_to_quantity(delta)?;
        Ok(item.quantity())
    }

    pub fn item(&self, selection: usize) -> Result<&Item> {
        let index = self.index_of(selection)?;
        Ok(&self.items[index])
    }

    fn item_mut(&mut self, selection: usize) -> Result<&mut Item> {
        let index = self.index_of(selection)?;
        Ok(&mut self.items[index])
    }

    fn index_of(&self, selection: usize) -> Result<usize> {
        selection
            .checked_sub(1)
            .filter(|index| *index < self.items.len())
            .ok_or(VendingError::InvalidSelection(selection))
    }

    pub fn price_of(&self, selection: usize) -> Result<Money> {
        self.item(selection).map(Item::price)
    }

    pub fn quantity_of(&self, selection: usize) -> Result<u32> {
        self.item(selection).map(Item::quantity)
    }

    pub fn name_of(&self, selection: usize) -> Result<&str> {
        self.item(selection).map(Item::name)
    }

    pub fn can_fulfill(&self, selection: usize, quantity: u32) -> Result<bool> {
        self.item(selection).map(|item| item.can_dispense(quantity))
    }

    /// Removes `quantity` units of an item.
    ///
    /// Callers check [`Catalog::can_fulfill`] first. The stock still refuses
    /// to go below zero and the catalog is left untouched in that case.
    pub fn dispense(&mut self, selection: usize, quantity: u32) -> Result<()> {
        self.item_mut(selection)?.reduce_quantity(quantity)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Lazily walks the catalog in selection order. The iterator is `Clone`,
    /// so a listing can be replayed without touching the catalog again.
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> + Clone {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| CatalogEntry {
                selection: index + 1,
                item,
            })
    }
}

/// One line of the catalog listing.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub selection: usize,
    pub item: &'a Item,
}

impl fmt::Display for CatalogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.item.is_sold_out() {
            write!(
                f,
                "{}. \t{}\n\tSorry, it's sold out...",
                self.selection,
                self.item.name()
            )
        } else {
            write!(
                f,
                "{}. \t{} \n\tCost: ${}",
                self.selection,
                self.item.name(),
                self.item.price()
            )
        }
    }
}
