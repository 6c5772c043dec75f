//! The contract every session-scoped backend operation implements.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// One named backend operation with a fixed request and response schema.
///
/// Implementors are zero-sized markers; the client does all the work:
///
/// ```no_run
/// use imobiliar_core::actions::condominio::{CondominioConsultar, CondominioConsultarInput};
/// use imobiliar_core::{Client, Credentials, Deadline};
///
/// # fn main() -> imobiliar_core::Result<()> {
/// let client = Client::new();
/// let credentials = Credentials::new("https://imob.example/api", "T1", "u1", "secret");
/// let condominio = client.with_session(&credentials, Deadline::none(), |session| {
///     client.run::<CondominioConsultar>(session, &CondominioConsultarInput { cod_condominio: 42 }, Deadline::none())
/// })?;
/// println!("{:?}", condominio.nome_condominio);
/// # Ok(())
/// # }
/// ```
pub trait Action {
    /// Value of `Header.Action` on the wire.
    const NAME: &'static str;
    type Input: Serialize;
    type Output: DeserializeOwned;
}
