//! # Domain models for the stored user profile
//!
//! Defines the record written by the login flow and read back by the home
//! page. It is `Serialize + Deserialize` and serialises to the JSON shape the
//! browser pages expect, so a profile written by the web build can be read by
//! any other page on the same origin.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserProfile`] | The signed-in student's profile card: display fields, club memberships, friend avatars, and the profile picture path. |
//!
//! The JSON key for [`UserProfile::profile_pic`] is `profilePic`; every other
//! field keeps its Rust name.

use serde::{Deserialize, Serialize};

/// Profile of the signed-in student.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub major: String,
    /// Free-form date string as shown on the card: "08/21/2003"
    pub birthday: String,
    pub workplace: String,
    pub bio: String,
    /// Club names in display order
    pub clubs: Vec<String>,
    /// Image paths of friend avatars in display order
    pub friends: Vec<String>,
    #[serde(rename = "profilePic")]
    pub profile_pic: String,
}

impl UserProfile {
    /// The fixed profile written on every successful login.
    ///
    /// There is no account lookup behind it: whatever credentials pass
    /// validation, this is the user that gets "signed in".
    pub fn demo() -> Self {
        Self {
            name: "Avery Parker".to_string(),
            major: "Computer Science".to_string(),
            birthday: "08/21/2003".to_string(),
            workplace: "Student Worker at IT Helpdesk".to_string(),
            bio: "I love building apps, studying CS, and hanging out on campus.".to_string(),
            clubs: vec![
                "Programming Club".to_string(),
                "Rodeo Club".to_string(),
                "Game Dev Society".to_string(),
            ],
            friends: vec![
                "img/friend1.jpg".to_string(),
                "img/friend2.jpg".to_string(),
                "img/friend3.jpg".to_string(),
            ],
            profile_pic: "img/avery.jpg".to_string(),
        }
    }

    /// First name, used for the greeting on the home page.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
