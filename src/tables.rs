//! Static reference tables: the alphabet, number words and letter-matching words.

use std::sync::LazyLock;

use crate::models::{AlphabetEntry, Difficulty, MatchWord, NumberEntry};

/// Largest number with a spelled-out form.
pub const MAX_NUMBER: u32 = 100;

const fn letter(
    letter: &'static str,
    sound: &'static str,
    word: &'static str,
    pronunciation: &'static str,
    translation: &'static str,
) -> AlphabetEntry {
    AlphabetEntry {
        letter,
        sound,
        word,
        pronunciation,
        translation,
    }
}

/// The 30 letters, in alphabet order.
pub const ALPHABET: [AlphabetEntry; 30] = [
    letter("А", "a", "автобус", "avtobus", "bus"),
    letter("Б", "b", "баба", "baba", "grandmother"),
    letter("В", "v", "вода", "voda", "water"),
    letter("Г", "g", "град", "grad", "city"),
    letter("Д", "d", "дом", "dom", "home"),
    letter("Е", "e", "ехо", "eho", "echo"),
    letter("Ж", "zh", "жена", "zhena", "woman"),
    letter("З", "z", "зъб", "zab", "tooth"),
    letter("И", "i", "име", "ime", "name"),
    letter("Й", "y", "йога", "yoga", "yoga"),
    letter("К", "k", "куче", "kuche", "dog"),
    letter("Л", "l", "луна", "luna", "moon"),
    letter("М", "m", "мама", "mama", "mother"),
    letter("Н", "n", "нос", "nos", "nose"),
    letter("О", "o", "око", "oko", "eye"),
    letter("П", "p", "път", "pat", "road"),
    letter("Р", "r", "риба", "riba", "fish"),
    letter("С", "s", "сън", "san", "dream"),
    letter("Т", "t", "там", "tam", "there"),
    letter("У", "u", "ухо", "uho", "ear"),
    letter("Ф", "f", "филм", "film", "movie"),
    letter("Х", "h", "хляб", "hlyab", "bread"),
    letter("Ц", "ts", "цвят", "tsvyat", "color"),
    letter("Ч", "ch", "час", "chas", "hour"),
    letter("Ш", "sh", "шал", "shal", "scarf"),
    letter("Щ", "sht", "щастие", "shtastie", "happiness"),
    letter("Ъ", "a", "със", "sas", "with"),
    // Only ever written before "о", where it softens the consonant.
    letter("Ь", "y", "шофьор", "shofyor", "driver"),
    letter("Ю", "yu", "юни", "yuni", "June"),
    letter("Я", "ya", "ягода", "yagoda", "strawberry"),
];

/// Words for the letter-matching game.
pub const MATCH_WORDS: [MatchWord; 9] = [
    MatchWord {
        bulgarian: "ягода",
        sounds: &["ya", "g", "o", "d", "a"],
        translation: "strawberry",
        difficulty: Difficulty::Easy,
    },
    MatchWord {
        bulgarian: "юни",
        sounds: &["yu", "n", "i"],
        translation: "June",
        difficulty: Difficulty::Easy,
    },
    MatchWord {
        bulgarian: "щастие",
        sounds: &["sht", "a", "s", "t", "i", "e"],
        translation: "happiness",
        difficulty: Difficulty::Medium,
    },
    MatchWord {
        bulgarian: "майка",
        sounds: &["m", "a", "y", "k", "a"],
        translation: "mother",
        difficulty: Difficulty::Easy,
    },
    MatchWord {
        bulgarian: "приятел",
        sounds: &["p", "r", "i", "ya", "t", "e", "l"],
        translation: "friend",
        difficulty: Difficulty::Medium,
    },
    MatchWord {
        bulgarian: "жена",
        sounds: &["zh", "e", "n", "a"],
        translation: "woman",
        difficulty: Difficulty::Easy,
    },
    MatchWord {
        bulgarian: "шал",
        sounds: &["sh", "a", "l"],
        translation: "scarf",
        difficulty: Difficulty::Easy,
    },
    MatchWord {
        bulgarian: "чанта",
        sounds: &["ch", "a", "n", "t", "a"],
        translation: "bag",
        difficulty: Difficulty::Easy,
    },
    MatchWord {
        bulgarian: "цвете",
        sounds: &["ts", "v", "e", "t", "e"],
        translation: "flower",
        difficulty: Difficulty::Medium,
    },
];

const UNITS: [&str; 20] = [
    "нула",
    "едно",
    "две",
    "три",
    "четири",
    "пет",
    "шест",
    "седем",
    "осем",
    "девет",
    "десет",
    "единадесет",
    "дванадесет",
    "тринадесет",
    "четиринадесет",
    "петнадесет",
    "шестнадесет",
    "седемнадесет",
    "осемнадесет",
    "деветнадесет",
];

// Indexed by the tens digit; 0 and 1 are covered by UNITS.
const TENS: [&str; 10] = [
    "",
    "",
    "двадесет",
    "тридесет",
    "четиридесет",
    "петдесет",
    "шестдесет",
    "седемдесет",
    "осемдесет",
    "деветдесет",
];

fn spell(n: u32) -> String {
    match n {
        0..=19 => UNITS[n as usize].to_string(),
        MAX_NUMBER => "сто".to_string(),
        _ => {
            let (tens, unit) = ((n / 10) as usize, (n % 10) as usize);
            if unit == 0 {
                TENS[tens].to_string()
            } else {
                format!("{} и {}", TENS[tens], UNITS[unit])
            }
        }
    }
}

/// Every number from 0 to [`MAX_NUMBER`]; the index equals the value.
pub static NUMBERS: LazyLock<Vec<NumberEntry>> = LazyLock::new(|| {
    (0..=MAX_NUMBER)
        .map(|value| NumberEntry {
            value,
            word: spell(value),
        })
        .collect()
});

/// Spelled-out form of `n`, if it is within the table.
pub fn number_word(n: u32) -> Option<&'static str> {
    NUMBERS.get(n as usize).map(|e| e.word.as_str())
}

/// Filter the number table the way the reference screen's search box does.
pub fn search_numbers(query: &str) -> Vec<&'static NumberEntry> {
    let query = query.trim().to_lowercase();
    NUMBERS
        .iter()
        .filter(|e| {
            let digits = e.value.to_string();
            query.is_empty()
                || digits.contains(&query)
                || e.word.to_lowercase().contains(&query)
                || format!("number {}", digits).contains(&query)
        })
        .collect()
}

/// A named range selection offered in the settings row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    /// Half-open index bounds into the table; `None` means a custom pick.
    pub bounds: Option<(usize, usize)>,
}

pub const ALPHABET_PRESETS: [Preset; 5] = [
    Preset { label: "0-5", bounds: Some((0, 5)) },
    Preset { label: "5-10", bounds: Some((5, 10)) },
    Preset { label: "10-20", bounds: Some((10, 20)) },
    Preset { label: "20-30", bounds: Some((20, 30)) },
    Preset { label: "Custom", bounds: None },
];

pub const NUMBER_PRESETS: [Preset; 4] = [
    Preset { label: "0-10", bounds: Some((0, 11)) },
    Preset { label: "11-20", bounds: Some((11, 21)) },
    Preset { label: "21-50", bounds: Some((21, 51)) },
    Preset { label: "51-100", bounds: Some((51, 101)) },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_ordered_and_complete() {
        assert_eq!(ALPHABET.len(), 30);
        assert_eq!(ALPHABET[0].letter, "А");
        assert_eq!(ALPHABET[29].letter, "Я");
        assert!(ALPHABET.iter().all(|e| !e.sound.is_empty()));
    }

    #[test]
    fn example_line() {
        assert_eq!(ALPHABET[0].example(), "автобус (avtobus) - bus");
    }

    #[test]
    fn number_table_covers_zero_to_hundred() {
        assert_eq!(NUMBERS.len(), 101);
        assert!(NUMBERS.iter().enumerate().all(|(i, e)| e.value as usize == i));
        assert_eq!(number_word(0), Some("нула"));
        assert_eq!(number_word(7), Some("седем"));
        assert_eq!(number_word(10), Some("десет"));
        assert_eq!(number_word(100), Some("сто"));
        assert_eq!(number_word(101), None);
    }

    #[test]
    fn compound_numbers() {
        assert_eq!(number_word(21), Some("двадесет и едно"));
        assert_eq!(number_word(22), Some("двадесет и две"));
        assert_eq!(number_word(32), Some("тридесет и две"));
        assert_eq!(number_word(40), Some("четиридесет"));
        assert_eq!(number_word(99), Some("деветдесет и девет"));
    }

    #[test]
    fn match_words_are_well_formed() {
        for word in MATCH_WORDS {
            assert!(!word.sounds.is_empty(), "{}", word.bulgarian);
            assert!(word.sounds.len() <= word.bulgarian.chars().count());
        }
    }

    #[test]
    fn search_by_digits_and_word() {
        let hits: Vec<u32> = search_numbers("седем").iter().map(|e| e.value).collect();
        assert!(hits.contains(&7));
        assert!(hits.contains(&17));
        assert!(hits.contains(&70));
        assert!(hits.contains(&77));

        let hits: Vec<u32> = search_numbers("number 10").iter().map(|e| e.value).collect();
        assert_eq!(hits, vec![10, 100]);

        assert_eq!(search_numbers("").len(), NUMBERS.len());
        assert!(search_numbers("zzz").is_empty());
    }

    #[test]
    fn presets_fit_their_tables() {
        for preset in ALPHABET_PRESETS {
            if let Some((start, end)) = preset.bounds {
                assert!(start < end && end <= ALPHABET.len());
            }
        }
        for preset in NUMBER_PRESETS {
            let (start, end) = preset.bounds.unwrap();
            assert!(start < end && end <= NUMBERS.len());
        }
    }
}
