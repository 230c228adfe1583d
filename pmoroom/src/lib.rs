//! # pmoroom - Rooms de lecture collaborative
//!
//! Les membres d'une room mettent des médias en file et votent pour
//! décider de l'ordre de lecture. Cette crate fournit :
//! - **Room** : participants, file ordonnée par score et votes, sous un
//!   verrou unique
//! - **Completion** : issue unique (joué / retiré) de chaque média mis en file
//! - **RoomEvent** : évènements diffusés aux couches de transport
//! - **RoomRegistry** : rooms indexées par clé de session (ex. id de chat)
//! - **Player** : consommateur qui prend la tête de file
//!
//! # Exemple d'utilisation
//!
//! ```
//! use pmomedium::MediumKey;
//! use pmoroom::{Outcome, Room};
//!
//! # #[tokio::main]
//! # async fn main() -> pmoroom::Result<()> {
//! let room: Room<u64, MediumKey> = Room::new();
//! room.join(1).await;
//! room.join(2).await;
//!
//! let song = MediumKey::new("youtube", "cNtZAbq2Ig4");
//! let completion = room.queue(1, song.clone()).await?;
//! assert_eq!(room.vote(&2, &song, 1).await?, 1);
//!
//! room.mark_played(&song).await;
//! assert_eq!(completion.wait().await, Outcome::Played);
//! # Ok(())
//! # }
//! ```

mod completion;
mod config_ext;
mod error;
mod events;
pub mod logs;
mod player;
mod registry;
mod room;

pub use completion::{Completion, Outcome, RemovalReason};
pub use config_ext::RoomConfigExt;
pub use error::{Error, Result};
pub use events::{RoomEvent, DEFAULT_EVENT_CAPACITY};
pub use player::{Player, DEFAULT_POLL_INTERVAL};
pub use registry::RoomRegistry;
pub use room::{Participant, Room, RoomMedium};
