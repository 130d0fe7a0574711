//! Resume timeline.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

pub const EXPERIENCE: &[Position] = &[
    Position {
        title: "Senior Software Engineer",
        company: "Riverbend Analytics",
        period: "2022 - Present",
        highlights: &[
            "Moved the customer dashboard to a Rust/WASM front end, cutting load time in half.",
            "Led the design of an ingestion service handling 40k events per second.",
        ],
    },
    Position {
        title: "Software Engineer",
        company: "Cedar Labs",
        period: "2019 - 2022",
        highlights: &[
            "Built internal tooling for release automation across 30 services.",
            "Mentored four engineers through their first production launches.",
        ],
    },
];

pub const EDUCATION: &[Education] = &[Education {
    degree: "B.S. Computer Science",
    school: "Oregon State University",
    period: "2015 - 2019",
}];
