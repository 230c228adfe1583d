//! # pmomedium - Identité des médias partagés dans une room
//!
//! Un média (vidéo YouTube, morceau, ...) n'est connu du reste de PMOParty
//! que par son identité : un couple `(provider, id)`. Deux médias sont
//! identiques si et seulement si les deux composantes sont égales.
//!
//! La crate fournit :
//! - **Medium** : le contrat d'identité implémenté par tout type de média
//! - **MediumKey** : l'identité concrète, utilisable comme clé de HashMap
//! - **resolve** : la reconnaissance d'un média à partir d'une URL brute
//!
//! # Exemple
//!
//! ```
//! use pmomedium::{resolve, Medium, Provider};
//!
//! let medium = resolve("https://youtu.be/YgGzAKP_HuM").unwrap();
//! assert_eq!(medium.provider(), Provider::YOUTUBE);
//! assert_eq!(medium.id(), "YgGzAKP_HuM");
//! ```

mod error;
mod medium;
mod provider;
mod resolve;
mod youtube;

pub use error::{Error, Result};
pub use medium::{identical, Medium, MediumKey};
pub use provider::Provider;
pub use resolve::{first_url, resolve, SupportedMedium};
pub use youtube::YouTubeVideo;
