use shared::vote_state::{LikedDesigns, LIKED_STORAGE_KEY};
use web_sys::{window, Storage};

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn load_liked() -> LikedDesigns {
    let raw = local_storage().and_then(|s| s.get_item(LIKED_STORAGE_KEY).ok().flatten());
    LikedDesigns::from_storage(raw.as_deref())
}

// Storage can be unavailable (private mode, quota); the flag then only lives for this page view.
pub fn save_liked(liked: &LikedDesigns) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LIKED_STORAGE_KEY, &liked.to_storage());
    }
}
