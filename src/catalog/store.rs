use crate::domain::{SearchCriteria, Sweet, SweetCreate};
use super::error::{CatalogError, CatalogResult};

/// In-memory sweet catalog.
///
/// Records live in a `Vec` so listing and search keep insertion order. The
/// catalog is the only owner of its records; every operation hands back clones.
#[derive(Debug, Default)]
pub struct Catalog {
    sweets: Vec<Sweet>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records, including out-of-stock ones.
    pub fn len(&self) -> usize {
        self.sweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sweets.is_empty()
    }

    /// Looks up any record by id, in stock or not.
    pub fn get(&self, id: i64) -> Option<Sweet> {
        self.sweets.iter().find(|s| s.id == id).cloned()
    }

    /// Adds a sweet at the end of the catalog.
    ///
    /// # Errors
    /// - `Validation` when a field is missing, negative, or out of range
    /// - `TypeMismatch` when the price is not a finite number
    /// - `Conflict` when the id is already taken
    pub fn add(&mut self, create: SweetCreate) -> CatalogResult<Sweet> {
        if create.id == 0 || create.name.trim().is_empty() || create.category.trim().is_empty() {
            return Err(CatalogError::validation("All fields are required."));
        }
        if !create.price.is_finite() {
            return Err(CatalogError::type_mismatch("Price and quantity must be numbers."));
        }
        if create.id < 0 {
            return Err(CatalogError::validation("Sweet ID must be a positive number."));
        }
        if create.price < 0.0 || create.quantity < 0 {
            return Err(CatalogError::validation("Price and quantity cannot be negative."));
        }
        let quantity = u32::try_from(create.quantity)
            .map_err(|_| CatalogError::validation("Quantity exceeds the maximum stock level."))?;

        if self.position(create.id).is_some() {
            return Err(CatalogError::Conflict(create.id));
        }

        let sweet = Sweet {
            id: create.id,
            name: create.name,
            category: create.category,
            price: create.price,
            quantity,
        };
        self.sweets.push(sweet.clone());
        Ok(sweet)
    }

    /// Removes a sweet and returns the removed record.
    pub fn delete(&mut self, id: i64) -> CatalogResult<Sweet> {
        ensure_positive_id(id)?;
        let index = self.position(id).ok_or(CatalogError::NotFound(id))?;
        Ok(self.sweets.remove(index))
    }

    /// All sweets with stock left, in insertion order.
    pub fn list(&self) -> Vec<Sweet> {
        self.sweets.iter().filter(|s| s.in_stock()).cloned().collect()
    }

    /// Filters the in-stock sweets. Name and category match case-insensitively
    /// on substrings; price bounds are inclusive. An inverted price range
    /// matches nothing rather than failing.
    pub fn search(&self, criteria: &SearchCriteria) -> CatalogResult<Vec<Sweet>> {
        for bound in [criteria.min_price, criteria.max_price].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(CatalogError::type_mismatch("Price range values must be numbers."));
            }
        }
        if let (Some(min), Some(max)) = (criteria.min_price, criteria.max_price) {
            if min > max {
                return Ok(Vec::new());
            }
        }

        let name = needle(criteria.name.as_deref());
        let category = needle(criteria.category.as_deref());

        Ok(self
            .sweets
            .iter()
            .filter(|s| s.in_stock())
            .filter(|s| name.as_ref().map_or(true, |n| s.name.to_lowercase().contains(n)))
            .filter(|s| category.as_ref().map_or(true, |c| s.category.to_lowercase().contains(c)))
            .filter(|s| criteria.min_price.map_or(true, |min| s.price >= min))
            .filter(|s| criteria.max_price.map_or(true, |max| s.price <= max))
            .cloned()
            .collect())
    }

    /// Takes `quantity` units out of stock. Either the full amount is deducted
    /// or nothing changes.
    pub fn purchase(&mut self, id: i64, quantity: i64) -> CatalogResult<Sweet> {
        ensure_positive_id(id)?;
        if quantity <= 0 {
            return Err(CatalogError::validation("Purchase quantity must be a positive number."));
        }
        let sweet = self.find_mut(id)?;

        let remaining = u32::try_from(quantity)
            .ok()
            .and_then(|q| sweet.quantity.checked_sub(q));
        match remaining {
            Some(remaining) => {
                sweet.quantity = remaining;
                Ok(sweet.clone())
            }
            None => Err(CatalogError::InsufficientStock {
                name: sweet.name.clone(),
                available: u64::from(sweet.quantity),
                requested: quantity.unsigned_abs(),
            }),
        }
    }

    /// Adds `quantity` units to stock.
    pub fn restock(&mut self, id: i64, quantity: i64) -> CatalogResult<Sweet> {
        ensure_positive_id(id)?;
        if quantity <= 0 {
            return Err(CatalogError::validation("Restock quantity must be a positive number."));
        }
        let sweet = self.find_mut(id)?;

        let updated = u32::try_from(quantity)
            .ok()
            .and_then(|q| sweet.quantity.checked_add(q))
            .ok_or_else(|| CatalogError::validation("Restock would exceed the maximum stock level."))?;
        sweet.quantity = updated;
        Ok(sweet.clone())
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.sweets.iter().position(|s| s.id == id)
    }

    fn find_mut(&mut self, id: i64) -> CatalogResult<&mut Sweet> {
        self.sweets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(CatalogError::NotFound(id))
    }
}

impl FromIterator<Sweet> for Catalog {
    /// Builds a catalog from trusted records, keeping the first of any
    /// duplicate ids.
    fn from_iter<I: IntoIterator<Item = Sweet>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for sweet in iter {
            if catalog.position(sweet.id).is_none() {
                catalog.sweets.push(sweet);
            }
        }
        catalog
    }
}

fn ensure_positive_id(id: i64) -> CatalogResult<()> {
    if id <= 0 {
        return Err(CatalogError::validation("Sweet ID must be a positive number."));
    }
    Ok(())
}

// Empty filters are no-ops.
fn needle(filter: Option<&str>) -> Option<String> {
    filter.filter(|f| !f.is_empty()).map(str::to_lowercase)
}
