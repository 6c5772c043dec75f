//! Typed catalogue of backend actions.
//!
//! Each action is a unit struct implementing [`Action`](crate::action::Action);
//! run it with [`Client::run`](crate::client::Client::run) inside a session or
//! across tenants with [`Client::run_multi`](crate::client::Client::run_multi).
//! Field names follow the backend's wire keys, misspellings included.

pub mod cadastro;
pub mod condominio;
pub mod ctarec;

pub use cadastro::{AnexoPesquisar, FornecedorPesquisar, LojaConsultar, TarefaIncluir};
pub use condominio::{CondominioConsultar, CondominioPesquisar, ListaEconomias, ListaInadimplencias};
pub use ctarec::{BoletoConsultar, BoletoQuitar};

// Zero amounts and codes are left off the wire, like unset optional fields.
pub(crate) fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}

pub(crate) fn is_zero_f64(value: &f64) -> bool {
    *value == 0.0
}
