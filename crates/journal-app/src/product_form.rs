//! Add/Edit product form state.
//!
//! Maps text fields to a [`ProductDraft`]. The form is either idle
//! (editable), loading the product to edit, or waiting for a save.

use journal_core::{Product, ProductDraft, ProductId, ProductType};

/// Form fields in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Brand,
    StarIngredients,
    ProductType,
    Price,
    IngredientsList,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Brand,
        FormField::StarIngredients,
        FormField::ProductType,
        FormField::Price,
        FormField::IngredientsList,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Product Name",
            FormField::Brand => "Brand",
            FormField::StarIngredients => "Star Ingredients",
            FormField::ProductType => "Product Type",
            FormField::Price => "Price",
            FormField::IngredientsList => "Ingredients List",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: ProductId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// Waiting for `GET /products/{id}` (edit only)
    Loading,
    Idle,
    Submitting,
}

#[derive(Debug, Clone)]
pub struct ProductFormState {
    pub mode: FormMode,
    pub status: FormStatus,
    pub focused: FormField,
    pub name: String,
    pub brand: String,
    pub star_ingredients: String,
    /// Wire value; chosen by cycling through [`ProductType::ALL`]
    pub product_type: String,
    pub price: String,
    pub ingredients_list: String,
    /// Validation or save error shown under the form
    pub error: Option<String>,
}

impl ProductFormState {
    pub fn new_add() -> Self {
        Self {
            mode: FormMode::Add,
            status: FormStatus::Idle,
            focused: FormField::Name,
            name: String::new(),
            brand: String::new(),
            star_ingredients: String::new(),
            product_type: String::new(),
            price: String::new(),
            ingredients_list: String::new(),
            error: None,
        }
    }

    /// An edit form waiting for the product to load
    pub fn new_edit(id: ProductId) -> Self {
        Self {
            mode: FormMode::Edit { id },
            status: FormStatus::Loading,
            ..Self::new_add()
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add New Product",
            FormMode::Edit { .. } => "Edit Product",
        }
    }

    pub fn editing_id(&self) -> Option<ProductId> {
        match self.mode {
            FormMode::Edit { id } => Some(id),
            FormMode::Add => None,
        }
    }

    /// Fill the fields from a fetched product and make the form editable.
    pub fn load_product(&mut self, product: &Product) {
        self.name = product.name.clone();
        self.brand = product.brand.clone();
        self.star_ingredients = product.star_ingredients.clone();
        self.product_type = product.product_type.clone();
        self.price = product.price.map(|p| p.to_string()).unwrap_or_default();
        self.ingredients_list = product.ingredients_list.clone();
        self.status = FormStatus::Idle;
        self.error = None;
    }

    pub fn is_editable(&self) -> bool {
        self.status == FormStatus::Idle
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Brand => &self.brand,
            FormField::StarIngredients => &self.star_ingredients,
            FormField::ProductType => &self.product_type,
            FormField::Price => &self.price,
            FormField::IngredientsList => &self.ingredients_list,
        }
    }

    fn value_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Brand => Some(&mut self.brand),
            FormField::StarIngredients => Some(&mut self.star_ingredients),
            FormField::Price => Some(&mut self.price),
            FormField::IngredientsList => Some(&mut self.ingredients_list),
            // Chosen from a fixed list, not typed
            FormField::ProductType => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Type a character into the focused field. The price field only
    /// accepts digits.
    pub fn insert_char(&mut self, c: char) {
        if !self.is_editable() {
            return;
        }
        if self.focused == FormField::Price && !c.is_ascii_digit() {
            return;
        }
        if let Some(value) = self.value_mut(self.focused) {
            value.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_editable() {
            return;
        }
        if let Some(value) = self.value_mut(self.focused) {
            value.pop();
        }
    }

    /// Step the product type through the known types.
    pub fn cycle_product_type(&mut self, forward: bool) {
        if !self.is_editable() {
            return;
        }
        let all = ProductType::ALL;
        let next = match ProductType::parse(&self.product_type) {
            None if forward => all[0],
            None => all[all.len() - 1],
            Some(current) => {
                let idx = all.iter().position(|t| *t == current).unwrap_or(0);
                if forward {
                    all[(idx + 1) % all.len()]
                } else {
                    all[(idx + all.len() - 1) % all.len()]
                }
            }
        };
        self.product_type = next.as_str().to_string();
        self.error = None;
    }

    /// Build the request body. Every field is required; price must be a
    /// whole non-negative number.
    pub fn validate(&self) -> Result<ProductDraft, String> {
        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(format!("{} is required", field.label()));
            }
        }
        let price = self
            .price
            .trim()
            .parse::<i64>()
            .map_err(|_| "Price must be a whole number".to_string())?;

        Ok(ProductDraft {
            name: self.name.trim().to_string(),
            brand: self.brand.trim().to_string(),
            ingredients_list: self.ingredients_list.trim().to_string(),
            star_ingredients: self.star_ingredients.trim().to_string(),
            product_type: self.product_type.clone(),
            price: Some(price),
        })
    }

    pub fn begin_submit(&mut self) {
        self.status = FormStatus::Submitting;
        self.error = None;
    }

    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.status = FormStatus::Idle;
        self.error = Some(message.into());
    }
}
