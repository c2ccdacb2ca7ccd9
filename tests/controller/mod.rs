mod dog;
mod walk;
mod walker;
