pub mod binary_tree;
pub mod bubble;
pub mod cocktail;
pub mod gnome;
pub mod heap;
pub mod quick;
pub mod selection;
pub mod shell;
