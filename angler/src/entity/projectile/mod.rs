pub mod fish_hook;
