pub mod competition;
