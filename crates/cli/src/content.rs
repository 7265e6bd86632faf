// Built-in demo content for seeded resources
//
// One vote template is seeded per page, so VOTES has the same length as
// PAGE_CONTENTS.

/// Markdown content for the demo pages
pub const PAGE_CONTENTS: [&str; 3] = [
    "# Page 1\n\nThis is the first page with some **Markdown** content.\n\n- Item 1\n- Item 2\n- Item 3",
    "# Page 2\n\nThis is the second page with more **Markdown** content.\n\n- Item A\n- Item B\n- Item C",
    "# Page 3\n\nThis is the third page with even more **Markdown** content.\n\n- Item X\n- Item Y\n- Item Z",
];

pub struct VoteSpec {
    pub title: &'static str,
    pub question: &'static str,
}

pub const VOTES: [VoteSpec; 3] = [
    VoteSpec {
        title: "Vote 1",
        question: "Is this the first vote?",
    },
    VoteSpec {
        title: "Vote 2",
        question: "Is this the second vote?",
    },
    VoteSpec {
        title: "Vote 3",
        question: "Is this the third vote?",
    },
];

pub struct OptionSpec {
    pub title: &'static str,
    pub description: &'static str,
}

/// Options created under every vote template
pub const VOTE_OPTIONS: [OptionSpec; 3] = [
    OptionSpec {
        title: "Option A",
        description: "First option",
    },
    OptionSpec {
        title: "Option B",
        description: "Second option",
    },
    OptionSpec {
        title: "Option C",
        description: "Third option",
    },
];
