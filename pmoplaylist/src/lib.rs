//! # pmoplaylist - File de lecture ordonnée par score
//!
//! Chaque entrée porte un score entier modifiable et un timestamp d'ajout.
//! L'ordre de lecture est :
//! - score décroissant
//! - à score égal, ordre d'ajout (la plus ancienne d'abord)
//!
//! # Architecture
//!
//! - **PlaylistCore** : la file elle-même, sans verrou, pour les
//!   propriétaires qui la protègent déjà (ex. une room pmoroom)
//! - **Playlist** : la même file derrière un `tokio::sync::RwLock`
//!
//! # Exemple d'utilisation
//!
//! ```
//! use pmoplaylist::Playlist;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let playlist = Playlist::new();
//! let a = playlist.add("a").await;
//! let b = playlist.add("b").await;
//!
//! playlist.set_score(b, 1).await;
//! assert_eq!(playlist.order().await, vec![b, a]);
//! # }
//! ```

mod playlist;

pub use playlist::core::PlaylistCore;
pub use playlist::record::{EntryId, Record};
pub use playlist::Playlist;
