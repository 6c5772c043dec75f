//! Domain value sets and structures shared by several actions.
//!
//! # Design
//! The backend encodes enumerations as short strings. Each value set lists
//! the codes this crate knows about and keeps anything else in `Other`, so a
//! code added on the server side still deserializes and is sent back
//! unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! code_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A code not known to this crate, kept verbatim.
            Other(String),
        }

        impl $name {
            pub fn code(&self) -> &str {
                match self {
                    $( $name::$variant => $code, )+
                    $name::Other(code) => code,
                }
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                match code.as_str() {
                    $( $code => $name::$variant, )+
                    _ => $name::Other(code),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                match value {
                    $name::Other(code) => code,
                    known => known.code().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

code_set! {
    /// Yes/no flag used throughout the backend.
    SimNao {
        Sim => "S",
        Nao => "N",
    }
}

code_set! {
    /// Kind of record an attachment or task is linked to.
    TipoOrigem {
        Condominio => "C",
        Economia => "E",
        Imovel => "I",
        ContratoLocacao => "L",
        Comercializacao => "M",
        ContratoAdministracao => "A",
        Fornecedor => "F",
        Interessado => "P",
        LancamentoContaCorrente => "R",
    }
}

code_set! {
    CategoriaFornecedor {
        Administradora => "ADM",
        Agenciador => "AGEN",
        Agua => "AGUA",
        Banco => "BANC",
        CorretoresSeguro => "CORR",
        Elevadores => "ELEV",
        Extintores => "EXT",
        Funcionarios => "FUNC",
        Gas => "GAS",
        Impostos => "IMPE",
        Indicacao => "INDI",
        Limpeza => "LIMP",
        ManutencaoPredial => "MANU",
        MaterialEscritorio => "MATE",
        Outros => "OUTR",
        Pintura => "PINT",
        Portaria => "PORT",
        PrestacaoServico => "PRES",
        Seguros => "SEG",
        Advocacia => "ADVO",
        Impressao => "IMPR",
        ServicoPublico => "PUBL",
        Sindico => "SIND",
    }
}

code_set! {
    /// Field a supplier search matches against.
    PesquisarPorFornecedor {
        Nome => "NOME",
        CpfCnpj => "CPFCNPJ",
        Endereco => "ENDER",
    }
}

code_set! {
    /// Service tier of a condominium contract.
    Classificacao {
        Gestao => "G",
        Padrao => "P",
        Prime => "A",
        SuperVip => "S",
        TaxaUnica => "U",
        Vip => "V",
    }
}

code_set! {
    /// Role of a council member.
    CargoConselho {
        Conselheiro => "C",
        ConselheiroSuplente => "P",
        ConselhoConsultivo => "D",
        ConselhoFiscal => "A",
        Diretor => "F",
        Gestor => "G",
        Presidente => "E",
        Sindico => "S",
        Subsindico => "B",
        Tesoureiro => "T",
    }
}

/// Council member of a condominium block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Conselho {
    pub cod_pessoa: Option<i64>,
    pub cargo: Option<CargoConselho>,
    pub inicio_mandato: Option<String>,
    pub final_mandato: Option<String>,
    pub sindico_profissional: Option<String>,
    pub cod_fornecedor: Option<i64>,
}

/// Block (building or account) of a condominium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bloco {
    pub cod_bloco: Option<String>,
    pub tipo_lograd: Option<String>,
    pub descricao: Option<String>,
    pub fundo: Option<String>,
    #[serde(rename = "CEP")]
    pub cep: Option<i64>,
    pub endereco: Option<String>,
    pub bairro: Option<String>,
    pub qtde_economias: Option<i64>,
    pub ordem_bloco: Option<i64>,
    pub bloco_ativo: Option<String>,
    pub conselho: Option<Vec<Conselho>>,
}
