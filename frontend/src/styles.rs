pub const CONTAINER: &str = "bg-gray-900 container mx-auto px-6 py-10 max-w-4xl rounded-xl shadow-lg";

pub const DESIGN_CARD: &str = "group relative overflow-hidden rounded-3xl border border-gray-700 bg-gray-800";
pub const DESIGN_TITLE: &str = "absolute left-3 top-3 rounded-lg bg-black/35 px-2 py-1 text-xs text-white";
pub const LIKE_BUTTON: &str = "absolute bottom-3 right-3 flex items-center gap-1 rounded-full bg-black/55 px-2.5 py-1.5 text-white ring-1 ring-white/30 hover:bg-black/65 focus:outline-none focus:ring-2 focus:ring-yellow-400";

pub const TEXT_MUTED: &str = "text-sm text-gray-400";
pub const HEADING_LG: &str = "text-3xl font-extrabold mb-4 text-center text-gray-100";
pub const HEADING_SM: &str = "text-xl font-semibold text-gray-100";

pub const FLEX_BETWEEN: &str = "flex justify-between items-end";

pub const BG_PAGE: &str = "bg-gray-900 min-h-screen";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}
