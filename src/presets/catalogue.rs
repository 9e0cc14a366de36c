//! Built-in preset catalogue.
//!
//! Each entry is a flag design: a name and an ordered stripe sequence,
//! top to bottom. Order here is registration order and drives the
//! interactive listing.

/// Name and stripe colors for every built-in preset.
pub(super) const CATALOGUE: &[(&str, &[&str])] = &[
    (
        "agender",
        &[
            "#000000", "#BABABA", "#FFFFFF", "#BAF484", "#FFFFFF", "#BABABA", "#000000",
        ],
    ),
    ("androsexual", &["#01CCFF", "#603524", "#B799DE"]),
    (
        "aroace",
        &["#E28C00", "#ECCD00", "#FFFFFF", "#62AEDC", "#203856"],
    ),
    (
        "aromantic",
        &["#3BA740", "#A8D47A", "#FFFFFF", "#ABABAB", "#000000"],
    ),
    ("asexual", &["#000000", "#A4A4A4", "#FFFFFF", "#810081"]),
    (
        "baker",
        &[
            "#F23D9E", "#F80A24", "#F78022", "#F9E81F", "#1E972E", "#1B86BC", "#243897", "#6F0A82",
        ],
    ),
    (
        "beiyang",
        &["#DF1B12", "#FFC600", "#01639D", "#FFFFFF", "#000000"],
    ),
    (
        "bigender",
        &[
            "#C479A2", "#EDA5CD", "#D6C7E8", "#FFFFFF", "#D6C7E8", "#9AC7E8", "#6D82D1",
        ],
    ),
    ("bisexual", &["#D60270", "#9B4F96", "#0038A8"]),
    (
        "demiboy",
        &[
            "#7F7F7F", "#C4C4C4", "#9DD7EA", "#FFFFFF", "#9DD7EA", "#C4C4C4", "#7F7F7F",
        ],
    ),
    (
        "demigirl",
        &[
            "#7F7F7F", "#C4C4C4", "#FDADC8", "#FFFFFF", "#FDADC8", "#C4C4C4", "#7F7F7F",
        ],
    ),
    (
        "femboy",
        &[
            "#D260A5", "#E4AFCD", "#FEFEFE", "#57CEF8", "#FEFEFE", "#E4AFCD", "#D260A5",
        ],
    ),
    (
        "gay-men",
        &["#078D70", "#98E8C1", "#FFFFFF", "#7BADE2", "#3D1A78"],
    ),
    (
        "genderfae",
        &[
            "#97C3A5", "#C3DEAE", "#F9FACD", "#FFFFFF", "#FCA2C4", "#DB8AE4", "#A97EDD",
        ],
    ),
    (
        "genderfaun",
        &[
            "#FCD689", "#FFF09B", "#FAF9CD", "#FFFFFF", "#8EDED9", "#8CACDE", "#9782EC",
        ],
    ),
    (
        "genderfluid",
        &["#FE76A2", "#FFFFFF", "#BF12D7", "#000000", "#303CBE"],
    ),
    (
        "greysexual",
        &["#740194", "#AEB1AA", "#FFFFFF", "#AEB1AA", "#740194"],
    ),
    ("gynesexual", &["#F4A9B7", "#903F2B", "#5B953B"]),
    (
        "lesbian",
        &["#D62800", "#FF9B56", "#FFFFFF", "#D462A6", "#A40062"],
    ),
    ("neutrois", &["#FFFFFF", "#1F9F00", "#000000"]),
    ("nonbinary", &["#FCF431", "#FCFCFC", "#9D59D2", "#282828"]),
    (
        "omnisexual",
        &["#FE9ACE", "#FF53BF", "#200044", "#6760FE", "#8EA6FF"],
    ),
    ("pansexual", &["#FF1C8D", "#FFD700", "#1AB3FF"]),
    (
        "plural",
        &["#2D0625", "#543475", "#7675C3", "#89C7B0", "#F3EDBD"],
    ),
    ("polysexual", &["#F714BA", "#01D66A", "#1594F6"]),
    ("queer", &["#B57FDD", "#FFFFFF", "#49821E"]),
    (
        "rainbow",
        &["#E50000", "#FF8D00", "#FFEE00", "#028121", "#004CFF", "#770088"],
    ),
    (
        "tomboy",
        &[
            "#2F3FB9", "#613A03", "#FEFEFE", "#F1A9B7", "#FEFEFE", "#613A03", "#2F3FB9",
        ],
    ),
    (
        "transfeminine",
        &[
            "#73DEFF", "#FFE2EE", "#FFB5D6", "#FF8DC0", "#FFB5D6", "#FFE2EE", "#73DEFF",
        ],
    ),
    (
        "transgender",
        &["#55CDFD", "#F6AAB7", "#FFFFFF", "#F6AAB7", "#55CDFD"],
    ),
    (
        "transmasculine",
        &[
            "#FF8ABD", "#CDF5FE", "#9AEBFF", "#74DFFF", "#9AEBFF", "#CDF5FE", "#FF8ABD",
        ],
    ),
    (
        "xenogender",
        &[
            "#FF6692", "#FF9A98", "#FFB883", "#FBFFA8", "#85BCFF", "#9D85FF", "#A510FF",
        ],
    ),
];
