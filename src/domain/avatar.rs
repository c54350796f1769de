//! Default avatar selection for new accounts.

use rand::seq::SliceRandom;

use crate::config::DEFAULT_AVATARS;

/// Pick a default avatar for a freshly registered user.
///
/// Purely cosmetic; no invariant depends on which one is chosen.
pub fn pick_default() -> String {
    DEFAULT_AVATARS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DEFAULT_AVATARS[0])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picked_avatar_comes_from_the_default_set() {
        for _ in 0..20 {
            let avatar = pick_default();
            assert!(DEFAULT_AVATARS.contains(&avatar.as_str()));
        }
    }
}
