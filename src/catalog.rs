//! Static menu and job listings.

use rust_decimal::Decimal;

use crate::domain::{
    CustomizationGroup, CustomizationOption, JobListing, MenuCategory, MenuItem, SelectionMode,
};

/// Everything the shop offers. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Catalog {
    menu: Vec<MenuItem>,
    jobs: Vec<JobListing>,
}

impl Catalog {
    pub fn new(menu: Vec<MenuItem>, jobs: Vec<JobListing>) -> Self {
        Self { menu, jobs }
    }

    /// The shop's standard menu and open positions.
    pub fn standard() -> Self {
        Self::new(standard_menu(), standard_jobs())
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == id)
    }

    pub fn by_category(&self, category: MenuCategory) -> impl Iterator<Item = &MenuItem> {
        self.menu.iter().filter(move |item| item.category == category)
    }

    pub fn popular(&self) -> impl Iterator<Item = &MenuItem> {
        self.menu.iter().filter(|item| item.is_popular)
    }

    pub fn jobs(&self) -> &[JobListing] {
        &self.jobs
    }

    pub fn job(&self, id: &str) -> Option<&JobListing> {
        self.jobs.iter().find(|job| job.id == id)
    }
}

fn cents(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

fn option(id: &str, name: &str, price_cents: i64) -> CustomizationOption {
    CustomizationOption::new(id, name, cents(price_cents))
}

fn group(
    id: &str,
    name: &str,
    mode: SelectionMode,
    required: bool,
    options: Vec<CustomizationOption>,
) -> CustomizationGroup {
    CustomizationGroup {
        id: id.to_string(),
        name: name.to_string(),
        mode,
        required,
        options,
    }
}

struct ItemInfo<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    price_cents: i64,
    category: MenuCategory,
    is_popular: bool,
    is_spicy: bool,
}

fn item(info: ItemInfo<'_>, customizations: Vec<CustomizationGroup>) -> MenuItem {
    MenuItem {
        id: info.id.to_string(),
        name: info.name.to_string(),
        description: info.description.to_string(),
        price: cents(info.price_cents),
        image: format!("/images/{}.jpg", info.id),
        category: info.category,
        is_popular: info.is_popular,
        is_spicy: info.is_spicy,
        customizations,
    }
}

fn standard_menu() -> Vec<MenuItem> {
    use SelectionMode::{Multiple, Single};

    vec![
        item(
            ItemInfo {
                id: "burger-1",
                name: "Midnight Burger",
                description: "Double patty with bacon, cheese, and our secret midnight sauce",
                price_cents: 1499,
                category: MenuCategory::Burger,
                is_popular: true,
                is_spicy: false,
            },
            vec![
                group(
                    "burger-patty",
                    "Patty Options",
                    Single,
                    true,
                    vec![
                        option("regular", "Regular (2 patties)", 0),
                        option("single", "Single patty", -300),
                        option("triple", "Triple patty", 300),
                    ],
                ),
                group(
                    "burger-toppings",
                    "Toppings",
                    Multiple,
                    false,
                    vec![
                        option("lettuce", "Lettuce", 0),
                        option("tomato", "Tomato", 0),
                        option("onion", "Onion", 0),
                        option("pickles", "Pickles", 0),
                        option("extra-cheese", "Extra Cheese", 150),
                        option("extra-bacon", "Extra Bacon", 200),
                        option("avocado", "Avocado", 200),
                        option("fried-egg", "Fried Egg", 150),
                    ],
                ),
                group(
                    "burger-sauce",
                    "Sauce",
                    Multiple,
                    false,
                    vec![
                        option("midnight-sauce", "Midnight Sauce", 0),
                        option("mayo", "Mayo", 0),
                        option("ketchup", "Ketchup", 0),
                        option("mustard", "Mustard", 0),
                        option("bbq", "BBQ Sauce", 50),
                        option("ranch", "Ranch", 50),
                    ],
                ),
            ],
        ),
        item(
            ItemInfo {
                id: "pizza-1",
                name: "Loaded Pizza",
                description: "Fresh dough with premium toppings and extra cheese",
                price_cents: 1899,
                category: MenuCategory::Pizza,
                is_popular: true,
                is_spicy: false,
            },
            vec![
                group(
                    "pizza-size",
                    "Size",
                    Single,
                    true,
                    vec![
                        option("medium", "Medium (12\")", 0),
                        option("large", "Large (14\")", 400),
                        option("xlarge", "Extra Large (16\")", 700),
                    ],
                ),
                group(
                    "pizza-toppings",
                    "Toppings",
                    Multiple,
                    false,
                    vec![
                        option("pepperoni", "Pepperoni", 0),
                        option("sausage", "Italian Sausage", 150),
                        option("mushrooms", "Mushrooms", 100),
                        option("onions", "Onions", 100),
                        option("peppers", "Bell Peppers", 100),
                        option("olives", "Black Olives", 100),
                        option("bacon", "Bacon", 200),
                        option("chicken", "Grilled Chicken", 250),
                        option("pineapple", "Pineapple", 100),
                        option("extra-cheese", "Extra Cheese", 200),
                    ],
                ),
                group(
                    "pizza-crust",
                    "Crust",
                    Single,
                    false,
                    vec![
                        option("regular", "Regular", 0),
                        option("thin", "Thin Crust", 0),
                        option("thick", "Thick Crust", 100),
                        option("stuffed", "Stuffed Crust", 300),
                    ],
                ),
            ],
        ),
        item(
            ItemInfo {
                id: "wings-1",
                name: "Hot Wings",
                description: "Crispy wings tossed in your choice of sauce",
                price_cents: 1299,
                category: MenuCategory::Wings,
                is_popular: true,
                is_spicy: true,
            },
            vec![
                group(
                    "wings-quantity",
                    "Quantity",
                    Single,
                    true,
                    vec![
                        option("6pc", "6 Pieces", 0),
                        option("12pc", "12 Pieces", 800),
                        option("18pc", "18 Pieces", 1500),
                        option("24pc", "24 Pieces", 2000),
                    ],
                ),
                group(
                    "wings-sauce",
                    "Sauce",
                    Single,
                    true,
                    vec![
                        option("buffalo", "Buffalo (Medium)", 0),
                        option("mild", "Mild", 0),
                        option("hot", "Hot", 0),
                        option("bbq", "BBQ", 0),
                        option("honey-bbq", "Honey BBQ", 0),
                        option("garlic-parm", "Garlic Parmesan", 0),
                        option("teriyaki", "Teriyaki", 0),
                        option("lemon-pepper", "Lemon Pepper", 0),
                    ],
                ),
                group(
                    "wings-extras",
                    "Extras",
                    Multiple,
                    false,
                    vec![
                        option("ranch", "Ranch Dipping Sauce", 75),
                        option("blue-cheese", "Blue Cheese Dipping Sauce", 75),
                        option("celery", "Celery Sticks", 50),
                        option("fries", "Side of Fries", 350),
                    ],
                ),
            ],
        ),
        item(
            ItemInfo {
                id: "ice-1",
                name: "MAMITA'S Coconut Cream Ice",
                description: "Sweet, creamy, and slightly nutty coconut cream ice",
                price_cents: 1000,
                category: MenuCategory::Ice,
                is_popular: true,
                is_spicy: false,
            },
            vec![
                group(
                    "ice-size",
                    "Size",
                    Single,
                    true,
                    vec![option("regular", "Regular", 0), option("large", "Large", 300)],
                ),
                group(
                    "ice-toppings",
                    "Toppings",
                    Multiple,
                    false,
                    vec![
                        option("coconut-flakes", "Coconut Flakes", 100),
                        option("whipped-cream", "Whipped Cream", 75),
                        option("chocolate-drizzle", "Chocolate Drizzle", 50),
                        option("caramel-drizzle", "Caramel Drizzle", 50),
                        option("sprinkles", "Sprinkles", 50),
                    ],
                ),
            ],
        ),
        item(
            ItemInfo {
                id: "shake-1",
                name: "Monster Shake",
                description: "Thick milkshake topped with cookies, candy, and whipped cream",
                price_cents: 899,
                category: MenuCategory::Shake,
                is_popular: false,
                is_spicy: false,
            },
            vec![
                group(
                    "shake-flavor",
                    "Flavor",
                    Single,
                    true,
                    vec![
                        option("chocolate", "Chocolate", 0),
                        option("vanilla", "Vanilla", 0),
                        option("strawberry", "Strawberry", 0),
                        option("oreo", "Oreo", 100),
                        option("peanut-butter", "Peanut Butter", 100),
                        option("cookies-cream", "Cookies & Cream", 100),
                    ],
                ),
                group(
                    "shake-toppings",
                    "Toppings",
                    Multiple,
                    false,
                    vec![
                        option("whipped-cream", "Whipped Cream", 0),
                        option("oreos", "Oreo Cookies", 100),
                        option("candy", "Candy Pieces", 150),
                        option("brownie", "Brownie Chunks", 200),
                        option("sprinkles", "Sprinkles", 50),
                        option("cherry", "Cherry on Top", 50),
                    ],
                ),
                group(
                    "shake-size",
                    "Size",
                    Single,
                    false,
                    vec![
                        option("regular", "Regular (16oz)", 0),
                        option("large", "Large (24oz)", 200),
                    ],
                ),
            ],
        ),
        item(
            ItemInfo {
                id: "soda-1",
                name: "Day's Full Flavored Blue Pop Soda",
                description: "Refreshing 2-liter blue pop soda",
                price_cents: 300,
                category: MenuCategory::Soda,
                is_popular: false,
                is_spicy: false,
            },
            Vec::new(),
        ),
    ]
}

fn standard_jobs() -> Vec<JobListing> {
    vec![
        JobListing {
            id: "delivery-driver".to_string(),
            title: "Delivery Driver".to_string(),
            hourly_rate: cents(1550),
            tips: true,
            requires_drivers_license: true,
        },
        JobListing {
            id: "order-fulfillment".to_string(),
            title: "Order Fulfillment Specialist".to_string(),
            hourly_rate: cents(1350),
            tips: false,
            requires_drivers_license: false,
        },
    ]
}
