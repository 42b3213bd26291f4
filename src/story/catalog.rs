//! Genre and length catalogs offered to the user.
//!
//! Labels are the Russian strings interpolated into the prompt; ids are the
//! stable ASCII handles used on the command line.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryLength {
    pub id: &'static str,
    pub label: &'static str,
}

pub const GENRES: &[Genre] = &[
    Genre { id: "sci-fi", label: "Фантастика" },
    Genre { id: "drama", label: "Драма" },
    Genre { id: "thriller", label: "Триллер" },
    Genre { id: "fairy-tale", label: "Сказка" },
    Genre { id: "spy-novel", label: "Шпионский роман" },
    Genre { id: "detective", label: "Детектив-приключение" },
    Genre { id: "adventure", label: "Приключенческий роман" },
    Genre { id: "mystery", label: "Мистерия" },
    Genre { id: "comedy", label: "Комедия" },
];

pub const STORY_LENGTHS: &[StoryLength] = &[
    StoryLength { id: "short", label: "Короткий" },
    StoryLength { id: "medium", label: "Средний" },
    StoryLength { id: "long", label: "Длинный" },
    StoryLength { id: "full", label: "Полный разбор" },
];

#[must_use]
pub fn genre(id: &str) -> Option<&'static Genre> {
    GENRES.iter().find(|genre| genre.id == id)
}

#[must_use]
pub fn story_length(id: &str) -> Option<&'static StoryLength> {
    STORY_LENGTHS.iter().find(|length| length.id == id)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
