/// Read-only template used to pre-fill a new grocery item.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryItem {
    pub id: u64,
    pub name: String,
    pub emoji: String,
}

impl CategoryItem {
    pub fn new(id: u64, name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            emoji: emoji.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub items: Vec<CategoryItem>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: Vec<CategoryItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    pub fn find_item(&self, id: u64) -> Option<&CategoryItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dairy() -> Category {
        Category::new(
            "Dairy",
            vec![
                CategoryItem::new(10, "Milk", "🥛"),
                CategoryItem::new(11, "Cheese", "🧀"),
            ],
        )
    }

    #[test]
    fn should_find_item_by_id() {
        let category = dairy();

        let item = category.find_item(11);

        assert_eq!(item.map(|i| i.name.as_str()), Some("Cheese"));
    }

    #[test]
    fn should_return_none_when_item_not_in_category() {
        assert!(dairy().find_item(99).is_none());
    }

    #[test]
    fn should_keep_item_order() {
        let names: Vec<_> = dairy().items.into_iter().map(|i| i.name).collect();

        assert_eq!(names, vec!["Milk", "Cheese"]);
    }
}
