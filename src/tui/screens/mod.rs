//! Screen implementations for the terminal front end.

mod game;
mod game_over;
mod login;

pub use game::GameScreen;
pub use game_over::GameOverScreen;
pub use login::LoginScreen;
