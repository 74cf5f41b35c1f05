pub type Result<T = ()> = anyhow::Result<T>;
pub type Error = anyhow::Error;

pub mod settings;
pub mod sync;

pub fn print_json<T: ?Sized + serde::Serialize>(value: &T) -> Result {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
