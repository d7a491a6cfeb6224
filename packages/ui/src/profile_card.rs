use dioxus::prelude::*;
use store::UserProfile;

/// Card rendering a [`UserProfile`].
#[component]
pub fn ProfileCard(profile: UserProfile) -> Element {
    let UserProfile {
        name,
        major,
        birthday,
        workplace,
        bio,
        clubs,
        friends,
        profile_pic,
    } = profile;

    rsx! {
        div {
            class: "profile-card",
            style: "display: flex; flex-direction: column; gap: 1rem; width: 100%; max-width: 420px; padding: 1.5rem; border: 1px solid #e9e9e7; border-radius: 8px; background: #ffffff;",

            div {
                style: "display: flex; align-items: center; gap: 1rem;",
                img {
                    class: "profile-pic",
                    style: "width: 72px; height: 72px; border-radius: 50%; object-fit: cover;",
                    src: "{profile_pic}",
                    alt: "{name}",
                }
                div {
                    h2 {
                        style: "margin: 0; color: #37352f; font-size: 1.25rem;",
                        "{name}"
                    }
                    p {
                        style: "margin: 0.25rem 0 0; color: #787774; font-size: 0.875rem;",
                        "{major}"
                    }
                }
            }

            p {
                style: "margin: 0; color: #37352f; font-size: 0.9375rem;",
                "{bio}"
            }

            dl {
                style: "display: grid; grid-template-columns: auto 1fr; gap: 0.25rem 1rem; margin: 0; font-size: 0.875rem;",
                dt { style: "color: #787774;", "Birthday" }
                dd { style: "margin: 0;", "{birthday}" }
                dt { style: "color: #787774;", "Works at" }
                dd { style: "margin: 0;", "{workplace}" }
            }

            if !clubs.is_empty() {
                div {
                    h3 {
                        style: "margin: 0 0 0.5rem; color: #37352f; font-size: 0.9375rem;",
                        "Clubs"
                    }
                    ul {
                        style: "margin: 0; padding-left: 1.25rem;",
                        for club in clubs.iter() {
                            li { key: "{club}", "{club}" }
                        }
                    }
                }
            }

            if !friends.is_empty() {
                div {
                    h3 {
                        style: "margin: 0 0 0.5rem; color: #37352f; font-size: 0.9375rem;",
                        "Friends"
                    }
                    div {
                        style: "display: flex; gap: 0.5rem;",
                        for friend in friends.iter() {
                            img {
                                key: "{friend}",
                                style: "width: 40px; height: 40px; border-radius: 50%; object-fit: cover;",
                                src: "{friend}",
                                alt: "Friend",
                            }
                        }
                    }
                }
            }
        }
    }
}
