use rust_decimal::Decimal;

use crate::domain::{CatalogPage, Hotspot, Product};

fn product(
    id: &str,
    name: &str,
    description: &str,
    cents: i64,
    image: &str,
    details: &[(&str, &str)],
) -> Product {
    details.iter().fold(
        Product::new(id, name, Decimal::new(cents, 2))
            .with_description(description)
            .with_image(format!("/images/products/{image}")),
        |product, (label, text)| product.with_detail(*label, *text),
    )
}

pub(super) fn products() -> Vec<Product> {
    vec![
        product(
            "p1",
            "Premium Office Chair",
            "Ergonomic chair with lumbar support and adjustable armrests",
            24999,
            "chair.jpg",
            &[
                ("material", "Breathable mesh and premium leather"),
                ("warranty", "5 year manufacturer warranty"),
                ("dimensions", "26\"W x 26\"D x 38-42\"H"),
                ("weight", "35 lbs"),
                ("color", "Black/Gray"),
            ],
        ),
        product(
            "p2",
            "Wooden Desk",
            "Solid oak desk with cable management system",
            39999,
            "desk.jpg",
            &[
                ("material", "Solid oak with metal accents"),
                ("warranty", "3 year manufacturer warranty"),
                ("dimensions", "60\"W x 30\"D x 29\"H"),
                ("weight", "65 lbs"),
                ("color", "Natural oak finish"),
            ],
        ),
        product(
            "p3",
            "Modern Lamp",
            "LED desk lamp with adjustable brightness and color temperature",
            7999,
            "lamp.jpg",
            &[
                ("material", "Aluminum and plastic"),
                ("warranty", "2 year manufacturer warranty"),
                ("dimensions", "6\"W x 6\"D x 18\"H"),
                ("weight", "3 lbs"),
                ("features", "USB charging port, touch controls"),
            ],
        ),
        product(
            "p4",
            "Wireless Keyboard",
            "Slim profile keyboard with multi-device pairing",
            8999,
            "keyboard.jpg",
            &[
                ("material", "Aluminum and ABS plastic"),
                ("warranty", "1 year manufacturer warranty"),
                ("dimensions", "17\"W x 5\"D x 0.8\"H"),
                ("weight", "1.5 lbs"),
                ("features", "Backlit keys, 6-month battery life"),
            ],
        ),
        product(
            "p5",
            "Monitor Stand",
            "Adjustable height monitor stand with storage drawer",
            5999,
            "monitor-stand.jpg",
            &[
                ("material", "Bamboo and aluminum"),
                ("warranty", "1 year manufacturer warranty"),
                ("dimensions", "22\"W x 9\"D x 3-6\"H"),
                ("weight", "4 lbs"),
                ("features", "Cable management, organizer drawer"),
            ],
        ),
        product(
            "p6",
            "Wireless Mouse",
            "Ergonomic wireless mouse with programmable buttons",
            4999,
            "mouse.jpg",
            &[
                ("material", "ABS plastic with soft-touch coating"),
                ("warranty", "1 year manufacturer warranty"),
                ("dimensions", "4.5\"W x 2.5\"D x 1.5\"H"),
                ("weight", "0.3 lbs"),
                ("features", "12000 DPI, 6 programmable buttons"),
            ],
        ),
    ]
}

pub(super) fn pages() -> Vec<CatalogPage> {
    vec![
        CatalogPage::new("page1", "/images/catalog/page1.jpg")
            .with_hotspot(Hotspot::new("hs1", "p1", 30.0, 40.0, 40))
            .with_hotspot(Hotspot::new("hs2", "p2", 70.0, 60.0, 40)),
        CatalogPage::new("page2", "/images/catalog/page2.jpg")
            .with_hotspot(Hotspot::new("hs3", "p3", 25.0, 45.0, 40))
            .with_hotspot(Hotspot::new("hs4", "p4", 75.0, 30.0, 40)),
        CatalogPage::new("page3", "/images/catalog/page3.jpg")
            .with_hotspot(Hotspot::new("hs5", "p5", 40.0, 55.0, 40))
            .with_hotspot(Hotspot::new("hs6", "p6", 65.0, 35.0, 40)),
    ]
}
