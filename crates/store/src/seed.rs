//! Default demonstration catalog.
//!
//! Inserted into the remote collection the first time an empty listing
//! is observed, so a fresh deployment has something to show.

use green_blue_core::{Category, ProductInput};

/// The six demonstration products, spanning all three categories.
#[must_use]
pub fn default_products() -> Vec<ProductInput> {
    let entry = |name: &str, category: Category, price: u64, image: &str| ProductInput {
        name: name.to_string(),
        category,
        price,
        image: image.to_string(),
        stock: None,
        description: None,
    };

    vec![
        entry(
            "Cámara IP 4MP",
            Category::Cctv,
            250_000,
            "https://images.unsplash.com/photo-1557597774-9d273605dfa9?w=400",
        ),
        entry(
            "Grabador NVR 8ch",
            Category::Cctv,
            400_000,
            "https://images.unsplash.com/photo-1558002038-1055907df827?w=400",
        ),
        entry(
            "Lector Biométrico",
            Category::ControlDeAcceso,
            320_000,
            "https://images.unsplash.com/photo-1614064548392-d21f89090b7b?w=400",
        ),
        entry(
            "Panel de Control",
            Category::SeguridadElectronica,
            450_000,
            "https://images.unsplash.com/photo-1558346490-a72e53ae2d4f?w=400",
        ),
        entry(
            "Cámara Domo PTZ",
            Category::Cctv,
            550_000,
            "https://images.unsplash.com/photo-1612815154858-60aa4c59eaa6?w=400",
        ),
        entry(
            "Control de Acceso Facial",
            Category::ControlDeAcceso,
            680_000,
            "https://images.unsplash.com/photo-1560732488-6b0df240254a?w=400",
        ),
    ]
}
