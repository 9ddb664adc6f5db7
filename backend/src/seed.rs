use crate::structs::{Note, NoteVector};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

const TITLES: [&str; 10] = [
    "5 life lessons learned from cats",
    "What the government doesn't want you to know about cats",
    "The most boring article about cats you'll ever read",
    "7 things lady gaga has in common with cats",
    "The most incredible article about cats you'll ever read",
    "10 ways cats can help you live to 100",
    "9 reasons you can blame the recession on cats",
    "10 ways marketers are making you addicted to cats",
    "11 ways investing in cats can make you a millionaire",
    "Why you should forget everything you learned about cats",
];

pub const FIRST_ID: i64 = 1000;

/// The notes every fresh store starts from, ids `1000..=1009`.
pub fn notes() -> NoteVector {
    TITLES
        .iter()
        .zip(FIRST_ID..)
        .map(|(title, id)| Note {
            id,
            title: title.to_string(),
            content: LOREM.to_string(),
        })
        .collect()
}
