//! The artisan's product catalog and its search/category filter.
//!
//! Products are fixed sample data; nothing here persists.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pottery,
    Jewelry,
    Textiles,
    Woodwork,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Pottery,
        Category::Jewelry,
        Category::Textiles,
        Category::Woodwork,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Pottery => "Pottery",
            Category::Jewelry => "Jewelry",
            Category::Textiles => "Textiles",
            Category::Woodwork => "Woodwork",
            Category::Other => "Other",
        }
    }

    /// Case-insensitive lookup by label, used by the CLI
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Live,
    Draft,
    Sold,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Live => "Live",
            ProductStatus::Draft => "Draft",
            ProductStatus::Sold => "Sold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: String,
    pub views: u32,
    pub likes: u32,
    pub status: ProductStatus,
    /// ISO date the product was listed
    pub date_added: String,
}

impl Product {
    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Category dropdown selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// Cycle All -> Pottery -> ... -> Other -> All
    pub fn next(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[0]),
            CategoryFilter::Only(c) => {
                let idx = Category::ALL.iter().position(|x| *x == c).unwrap_or(0);
                Category::ALL
                    .get(idx + 1)
                    .map_or(CategoryFilter::All, |n| CategoryFilter::Only(*n))
            }
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[Category::ALL.len() - 1]),
            CategoryFilter::Only(c) => {
                match Category::ALL.iter().position(|x| *x == c) {
                    Some(0) | None => CategoryFilter::All,
                    Some(idx) => CategoryFilter::Only(Category::ALL[idx - 1]),
                }
            }
        }
    }
}

/// Search text plus category, both must match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        product.matches_search(&needle) && self.category.accepts(product.category)
    }

    /// Anything other than an empty search over all categories
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.category != CategoryFilter::All
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Total pages for `count` items; zero when there is nothing to show
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Items on a 1-indexed page; empty past the end
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    title: &str,
    description: &str,
    category: Category,
    price: &str,
    views: u32,
    likes: u32,
    status: ProductStatus,
    date_added: &str,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category,
        price: price.to_string(),
        views,
        likes,
        status,
        date_added: date_added.to_string(),
    }
}

/// The sample catalog shown on My Products
pub fn sample_products() -> Vec<Product> {
    use Category::*;
    use ProductStatus::*;

    vec![
        product(
            1,
            "Handcrafted Ceramic Bowl",
            "Beautiful glazed ceramic bowl perfect for serving or decoration. Handthrown on the wheel with love.",
            Pottery,
            "$45",
            324,
            47,
            Live,
            "2024-01-15",
        ),
        product(
            2,
            "Sterling Silver Pendant",
            "Elegant handmade silver pendant with intricate detailing and natural stone centerpiece.",
            Jewelry,
            "$89",
            187,
            23,
            Live,
            "2024-01-12",
        ),
        product(
            3,
            "Wooden Cutting Board",
            "Premium walnut cutting board with unique grain pattern. Food-safe finish applied.",
            Woodwork,
            "$78",
            156,
            31,
            Sold,
            "2024-01-08",
        ),
        product(
            4,
            "Macrame Wall Hanging",
            "Boho-style macrame wall art, handwoven with natural cotton rope in geometric pattern.",
            Textiles,
            "$62",
            203,
            35,
            Draft,
            "2024-01-05",
        ),
        product(
            5,
            "Ceramic Coffee Mug Set",
            "Set of 4 matching coffee mugs with speckled glaze. Microwave and dishwasher safe.",
            Pottery,
            "$52",
            289,
            42,
            Live,
            "2024-01-02",
        ),
        product(
            6,
            "Hand-forged Copper Bracelet",
            "Rustic copper bracelet with hammered texture. Adjustable size, develops beautiful patina over time.",
            Jewelry,
            "$34",
            145,
            18,
            Live,
            "2023-12-28",
        ),
        product(
            7,
            "Woven Basket Set",
            "Set of 3 nesting baskets woven from sustainable bamboo. Perfect for storage or display.",
            Textiles,
            "$95",
            167,
            29,
            Live,
            "2023-12-25",
        ),
        product(
            8,
            "Oak Dining Table",
            "Handcrafted solid oak dining table seats 6. Traditional joinery, modern design.",
            Woodwork,
            "$1,250",
            89,
            12,
            Draft,
            "2023-12-20",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_sample_catalog_has_eight_products() {
        let products = sample_products();
        assert_eq!(products.len(), 8);
        let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_activity() {
        assert!(!ProductFilter::default().is_active());
        let blank = ProductFilter {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert!(!blank.is_active());
        let by_category = ProductFilter {
            category: CategoryFilter::Only(Category::Jewelry),
            ..Default::default()
        };
        assert!(by_category.is_active());
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let products = sample_products();
        let filter = ProductFilter {
            search: "CERAMIC".to_string(),
            ..Default::default()
        };
        assert_eq!(
            titles(&filter.apply(&products)),
            vec!["Handcrafted Ceramic Bowl", "Ceramic Coffee Mug Set"]
        );

        // Only present in a description
        let filter = ProductFilter {
            search: "walnut".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&filter.apply(&products)), vec!["Wooden Cutting Board"]);
    }

    #[test]
    fn test_category_filter_combines_with_search() {
        let products = sample_products();
        let filter = ProductFilter {
            search: String::new(),
            category: CategoryFilter::Only(Category::Jewelry),
        };
        assert_eq!(filter.apply(&products).len(), 2);

        let filter = ProductFilter {
            search: "copper".to_string(),
            category: CategoryFilter::Only(Category::Jewelry),
        };
        assert_eq!(
            titles(&filter.apply(&products)),
            vec!["Hand-forged Copper Bracelet"]
        );

        let filter = ProductFilter {
            search: "copper".to_string(),
            category: CategoryFilter::Only(Category::Pottery),
        };
        assert!(filter.apply(&products).is_empty());
    }

    #[test]
    fn test_other_category_is_empty() {
        let products = sample_products();
        let filter = ProductFilter {
            search: String::new(),
            category: CategoryFilter::Only(Category::Other),
        };
        assert!(filter.apply(&products).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(8, 6), 2);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(13, 6), 3);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=8).collect();
        assert_eq!(page_slice(&items, 1, 6), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(page_slice(&items, 2, 6), &[7, 8]);
        assert!(page_slice(&items, 3, 6).is_empty());
        assert!(page_slice(&items, 0, 6).is_empty());
    }

    #[test]
    fn test_category_filter_cycles() {
        let mut filter = CategoryFilter::All;
        for _ in 0..Category::ALL.len() + 1 {
            filter = filter.next();
        }
        assert_eq!(filter, CategoryFilter::All);
        assert_eq!(CategoryFilter::All.prev(), CategoryFilter::Only(Category::Other));
        assert_eq!(
            CategoryFilter::Only(Category::Pottery).prev(),
            CategoryFilter::All
        );
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("woodwork"), Some(Category::Woodwork));
        assert_eq!(Category::parse(" Jewelry "), Some(Category::Jewelry));
        assert_eq!(Category::parse("glass"), None);
    }
}
