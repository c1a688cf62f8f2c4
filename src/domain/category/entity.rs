use crate::domain::category::value_objects::{CategoryId, CategoryName};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: Option<CategoryName>,
    pub description: Option<Option<String>>,
}

impl CategoryUpdate {
    pub fn new(id: CategoryId) -> Self {
        Self {
            id,
            name: None,
            description: None,
        }
    }

    pub fn with_name(mut self, name: CategoryName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }
}
