//! Emoji dataset and search index.
//!
//! The dataset is a process-wide table built the first time anything asks
//! for it and shared by every picker and index afterwards. Building it again
//! is never needed; [`dataset`] always hands back the same instance.
//!
//! ```rust
//! use emoji_textbox::emoji::{dataset, Category};
//!
//! let people = dataset().in_category(Category::People);
//! assert!(people.iter().any(|e| e.native == "😍"));
//! ```

pub mod search;

pub use search::{DatasetIndex, SearchFuture, SearchHit, SearchIndex};

use emojis::Group;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Picker categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Emojis inserted during this session, most used first.
    Frequent,
    /// Smileys, gestures and people.
    People,
    /// Animals, plants, weather.
    Nature,
    /// Food and drink.
    Foods,
    /// Sports, games, celebrations.
    Activity,
    /// Travel and places.
    Places,
    /// Everyday objects.
    Objects,
    /// Hearts, marks and signs.
    Symbols,
    /// Flags.
    Flags,
}

impl Category {
    /// Display order used when no category list is configured. Flags are
    /// left out.
    pub const DEFAULT_ORDER: [Category; 8] = [
        Category::Frequent,
        Category::People,
        Category::Activity,
        Category::Foods,
        Category::Nature,
        Category::Objects,
        Category::Places,
        Category::Symbols,
    ];

    /// Lowercase identifier, e.g. `"foods"`.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Frequent => "frequent",
            Category::People => "people",
            Category::Nature => "nature",
            Category::Foods => "foods",
            Category::Activity => "activity",
            Category::Places => "places",
            Category::Objects => "objects",
            Category::Symbols => "symbols",
            Category::Flags => "flags",
        }
    }

    /// Parses an identifier produced by [`Category::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        Some(match id {
            "frequent" => Category::Frequent,
            "people" => Category::People,
            "nature" => Category::Nature,
            "foods" => Category::Foods,
            "activity" => Category::Activity,
            "places" => Category::Places,
            "objects" => Category::Objects,
            "symbols" => Category::Symbols,
            "flags" => Category::Flags,
            _ => return None,
        })
    }

    /// Tab icon shown in the picker header.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Frequent => "🕘",
            Category::People => "😀",
            Category::Nature => "🐻",
            Category::Foods => "🍔",
            Category::Activity => "⚽",
            Category::Places => "🚀",
            Category::Objects => "💡",
            Category::Symbols => "❤️",
            Category::Flags => "🏁",
        }
    }

    /// Title shown above the grid.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Frequent => "Frequently used",
            Category::People => "Smileys & People",
            Category::Nature => "Animals & Nature",
            Category::Foods => "Food & Drink",
            Category::Activity => "Activity",
            Category::Places => "Travel & Places",
            Category::Objects => "Objects",
            Category::Symbols => "Symbols",
            Category::Flags => "Flags",
        }
    }

    /// The category a Unicode emoji group is listed under. Groups without
    /// a picker tab, such as skin tone components, map to `None`.
    pub fn from_group(group: Group) -> Option<Self> {
        match group {
            Group::SmileysAndEmotion | Group::PeopleAndBody => Some(Category::People),
            Group::AnimalsAndNature => Some(Category::Nature),
            Group::FoodAndDrink => Some(Category::Foods),
            Group::Activities => Some(Category::Activity),
            Group::TravelAndPlaces => Some(Category::Places),
            Group::Objects => Some(Category::Objects),
            Group::Symbols => Some(Category::Symbols),
            Group::Flags => Some(Category::Flags),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

/// One emoji in the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    /// Short identifier, e.g. `"heart_eyes"`. The first shortcode, or the
    /// snake-cased name for emojis without one.
    pub id: String,
    /// Human readable name, e.g. `"smiling face with heart-eyes"`.
    pub name: &'static str,
    /// The native glyph.
    pub native: &'static str,
    /// Category the emoji is listed under.
    pub category: Category,
    /// Extra search terms: every shortcode after the first.
    pub keywords: Vec<&'static str>,
    // default glyph first, then one per skin tone combination
    variants: Vec<&'static str>,
}

impl Emoji {
    fn from_unicode(e: &'static emojis::Emoji, category: Category) -> Self {
        let mut shortcodes = e.shortcodes();
        let id = match shortcodes.next() {
            Some(code) => code.to_string(),
            None => snake_case(e.name()),
        };
        let variants = match e.skin_tones() {
            Some(tones) => tones.map(|t| t.as_str()).collect(),
            None => vec![e.as_str()],
        };
        Self {
            id,
            name: e.name(),
            native: e.as_str(),
            category,
            keywords: shortcodes.collect(),
            variants,
        }
    }

    /// Whether skin tone variants exist.
    pub fn has_skin_tones(&self) -> bool {
        self.variants.len() > 1
    }

    /// All glyph variants, default first.
    pub fn skins(&self) -> Vec<String> {
        self.variants.iter().map(|s| s.to_string()).collect()
    }
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        if !out.is_empty() {
            out.push('_');
        }
        out.push_str(&word.to_lowercase());
    }
    out
}

/// The loaded emoji table with per-category and per-glyph lookups.
#[derive(Debug)]
pub struct Dataset {
    emojis: Vec<Emoji>,
    by_category: HashMap<Category, Vec<usize>>,
    by_native: HashMap<&'static str, usize>,
}

impl Dataset {
    /// Builds the table from the Unicode emoji list, in CLDR order.
    fn from_unicode() -> Self {
        let mut seen = HashSet::new();
        let emojis = emojis::iter()
            .filter_map(|e| {
                let category = Category::from_group(e.group())?;
                let mut emoji = Emoji::from_unicode(e, category);
                if !seen.insert(emoji.id.clone()) {
                    emoji.id = snake_case(emoji.name);
                    seen.insert(emoji.id.clone());
                }
                Some(emoji)
            })
            .collect();
        Self::build(emojis)
    }

    fn build(emojis: Vec<Emoji>) -> Self {
        let mut by_category: HashMap<Category, Vec<usize>> = HashMap::new();
        let mut by_native = HashMap::with_capacity(emojis.len());
        for (i, e) in emojis.iter().enumerate() {
            by_category.entry(e.category).or_default().push(i);
            by_native.entry(e.native).or_insert(i);
        }
        Self {
            emojis,
            by_category,
            by_native,
        }
    }

    /// Every emoji, in table order.
    pub fn all(&self) -> &[Emoji] {
        &self.emojis
    }

    /// Number of emojis.
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    /// Emojis listed under `category`. Always empty for
    /// [`Category::Frequent`], which is tracked per picker.
    pub fn in_category(&self, category: Category) -> Vec<&Emoji> {
        self.by_category
            .get(&category)
            .map(|idx| idx.iter().map(|&i| &self.emojis[i]).collect())
            .unwrap_or_default()
    }

    /// Looks up an emoji by its default glyph.
    pub fn by_native(&self, native: &str) -> Option<&Emoji> {
        self.by_native.get(native).map(|&i| &self.emojis[i])
    }
}

static DATASET: Lazy<Dataset> = Lazy::new(|| {
    let ds = Dataset::from_unicode();
    tracing::debug!(emojis = ds.len(), "emoji dataset initialized");
    ds
});

/// Returns the process-wide dataset, building it on first use.
pub fn dataset() -> &'static Dataset {
    &DATASET
}

/// Whether the dataset has been built yet.
pub fn is_loaded() -> bool {
    Lazy::get(&DATASET).is_some()
}
