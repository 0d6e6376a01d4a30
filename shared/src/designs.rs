#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Design {
    pub id: &'static str,
    pub title: &'static str,
    pub file: &'static str,
    pub alt: &'static str,
}

pub const DESIGNS: [Design; 4] = [
    Design { id: "classic", title: "Classic Palm", file: "classic.webp", alt: "Classic Eid Palm design" },
    Design { id: "geometric", title: "Geometric Glow", file: "geometric.webp", alt: "Geometric Eid Palm design" },
    Design { id: "calligraphy", title: "Calligraphy Aura", file: "calligraphy.webp", alt: "Calligraphy Eid Palm design" },
    Design { id: "minimal", title: "Minimal Modern", file: "minimal.webp", alt: "Minimal Eid Palm design" },
];

impl Design {
    pub fn image_path(&self) -> String {
        format!("/designs/{}", self.file)
    }
}

/// Comma-joined catalog ids, in catalog order, for `GET /api/likes?ids=`.
pub fn ids_query() -> String {
    DESIGNS.iter().map(|d| d.id).collect::<Vec<_>>().join(",")
}
