//! Built-in category catalog.
//!
//! Template ids are unique across every category so a template can be looked
//! up by id alone. This list is the source of truth; the PostgreSQL seed
//! migration must carry the same rows and is checked against it in tests.

use business::domain::category::model::{Category, CategoryItem};

pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(
            "Produce",
            vec![
                CategoryItem::new(101, "Apples", "🍎"),
                CategoryItem::new(102, "Bananas", "🍌"),
                CategoryItem::new(103, "Carrots", "🥕"),
                CategoryItem::new(104, "Tomatoes", "🍅"),
                CategoryItem::new(105, "Lettuce", "🥬"),
                CategoryItem::new(106, "Avocados", "🥑"),
            ],
        ),
        Category::new(
            "Dairy",
            vec![
                CategoryItem::new(201, "Milk", "🥛"),
                CategoryItem::new(202, "Cheese", "🧀"),
                CategoryItem::new(203, "Butter", "🧈"),
                CategoryItem::new(204, "Eggs", "🥚"),
            ],
        ),
        Category::new(
            "Bakery",
            vec![
                CategoryItem::new(301, "Bread", "🍞"),
                CategoryItem::new(302, "Croissants", "🥐"),
                CategoryItem::new(303, "Bagels", "🥯"),
            ],
        ),
        Category::new(
            "Meat & Fish",
            vec![
                CategoryItem::new(401, "Chicken", "🍗"),
                CategoryItem::new(402, "Beef", "🥩"),
                CategoryItem::new(403, "Fish", "🐟"),
                CategoryItem::new(404, "Shrimp", "🦐"),
            ],
        ),
        Category::new(
            "Pantry",
            vec![
                CategoryItem::new(501, "Rice", "🍚"),
                CategoryItem::new(502, "Pasta", "🍝"),
                CategoryItem::new(503, "Honey", "🍯"),
                CategoryItem::new(504, "Salt", "🧂"),
            ],
        ),
        Category::new(
            "Beverages",
            vec![
                CategoryItem::new(601, "Coffee", "☕"),
                CategoryItem::new(602, "Tea", "🍵"),
                CategoryItem::new(603, "Juice", "🧃"),
                CategoryItem::new(604, "Water", "💧"),
            ],
        ),
    ]
}
