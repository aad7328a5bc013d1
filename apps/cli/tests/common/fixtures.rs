//! Question set fixtures in the `==` block format.

/// Capital-city question with four options, `Paris` correct.
pub const FRANCE: &str = "==\nما عاصمة فرنسا؟\n\nباريس*\nلندن\nبرلين\nروما\n";

/// Same options as [`FRANCE`] in another order.
pub const FRANCE_SHUFFLED: &str = "==\nما عاصمة فرنسا ؟\n\nروما\nلندن\nباريس*\nبرلين\n";

/// [`FRANCE`] with a fifth distractor option.
pub const FRANCE_FIVE_OPTIONS: &str =
    "==\nما عاصمة فرنسا؟\n\nباريس*\nلندن\nبرلين\nروما\nمدريد\n";

/// [`FRANCE`] phrased differently.
pub const FRANCE_REPHRASED: &str = "==\nعاصمة فرنسا هي؟\n\nباريس*\nلندن\nبرلين\nروما\n";

pub const EGYPT: &str = "==\nما عاصمة مصر؟\n\nالقاهرة*\nالرياض\nعمان\nبغداد\n";

/// Egypt question written with unnormalized letters and extra punctuation.
pub const EGYPT_VARIANT: &str = "==\nما عاصمة مصر\n\n(القاهره)*\nالرياض.\nعمان\nبغداد\n";

pub const JAPAN: &str = "==\nما عاصمة اليابان؟\n\nطوكيو*\nأوساكا\nكيوتو\nناغويا\n";

/// Concatenate question blocks into one set.
pub fn set(blocks: &[&str]) -> String {
    blocks.concat()
}
