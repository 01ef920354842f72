//! The fixed profile record shown by the component.

/// Portrait shown alongside the profile details.
const QUAVO_IMG_SRC: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/2/21/Carmelo_Anthony_Rich_Kleiman_Quavo_Jim_Mollica_Boardroom_Bose_2025_NBA_All_Star_Weekend_%28cropped%29.jpg/250px-Carmelo_Anthony_Rich_Kleiman_Quavo_Jim_Mollica_Boardroom_Bose_2025_NBA_All_Star_Weekend_%28cropped%29.jpg";

/// Read-only data describing the displayed subject.
///
/// Fields are private so a record can only be produced by [`ProfileRecord::new`]
/// or [`Default`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    full_name: String,
    bio: String,
    img_src: String,
    profession: String,
}

impl ProfileRecord {
    /// Build a record from its four fields.
    pub fn new(
        full_name: impl Into<String>,
        bio: impl Into<String>,
        img_src: impl Into<String>,
        profession: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            bio: bio.into(),
            img_src: img_src.into(),
            profession: profession.into(),
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Image URL, passed through verbatim to the host image primitive.
    pub fn img_src(&self) -> &str {
        &self.img_src
    }

    pub fn profession(&self) -> &str {
        &self.profession
    }
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self::new(
            "quavo",
            "just dropped the album, y'all go stream now!",
            QUAVO_IMG_SRC,
            "musician",
        )
    }
}
