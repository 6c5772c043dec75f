//! Registry actions (`CADASTRO_*`): suppliers, attachments, branches and
//! tasks.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::types::{CategoriaFornecedor, PesquisarPorFornecedor, SimNao, TipoOrigem};

/// `CADASTRO_FORNECEDOR_PESQUISAR`
pub struct FornecedorPesquisar;

impl Action for FornecedorPesquisar {
    const NAME: &'static str = "CADASTRO_FORNECEDOR_PESQUISAR";
    type Input = FornecedorPesquisarInput;
    type Output = FornecedorPesquisarOutput;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FornecedorPesquisarInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordenar_por: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pesquisar_por: Option<PesquisarPorFornecedor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<CategoriaFornecedor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ativo: Option<SimNao>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_alteracao_inicial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qtde_linhas: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximas_linhas: Option<SimNao>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FornecedorPesquisarOutput {
    pub fornecedores: Option<Vec<FornecedorResumo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FornecedorResumo {
    pub cod_fornecedor: Option<i64>,
    pub nome: Option<String>,
    pub nome_fantasia: Option<String>,
}

/// `CADASTRO_ANEXO_PESQUISAR`: attachments linked to a record.
pub struct AnexoPesquisar;

impl Action for AnexoPesquisar {
    const NAME: &'static str = "CADASTRO_ANEXO_PESQUISAR";
    type Input = AnexoPesquisarInput;
    type Output = AnexoPesquisarOutput;
}

/// `tipo_origem` and `extra` are always sent; the backend expects both keys
/// even when `extra` is null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnexoPesquisarInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_anexo: Option<i64>,
    pub tipo_origem: TipoOrigem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_origem: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_cod_origem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_categoria: Option<i64>,
    pub extra: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envia_site: Option<SimNao>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordenar_por: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qtde_linhas: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximas_linhas: Option<SimNao>,
}

impl AnexoPesquisarInput {
    /// Every attachment of record `cod_origem` of kind `tipo_origem`.
    pub fn for_origin(tipo_origem: TipoOrigem, cod_origem: i64) -> Self {
        Self {
            descricao: None,
            tipo_anexo: None,
            tipo_origem,
            cod_origem: Some(cod_origem),
            sub_cod_origem: None,
            cod_categoria: None,
            extra: None,
            envia_site: None,
            ordenar_por: None,
            qtde_linhas: None,
            proximas_linhas: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnexoPesquisarOutput {
    pub anexos: Option<Vec<Anexo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Anexo {
    pub cod_anexo: Option<i64>,
    pub cod_categoria: Option<String>,
    pub descricao: Option<String>,
    pub cod_tipo: Option<i64>,
    pub tipo_origem: Option<TipoOrigem>,
    pub cod_origem: Option<i64>,
    pub extra: Option<String>,
    pub is_envia_site: Option<String>,
    pub envia_site: Option<String>,
    pub data_envia_site: Option<String>,
}

/// `CADASTRO_LOJA_CONSULTAR`: one branch office.
pub struct LojaConsultar;

impl Action for LojaConsultar {
    const NAME: &'static str = "CADASTRO_LOJA_CONSULTAR";
    type Input = LojaConsultarInput;
    type Output = Loja;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LojaConsultarInput {
    // Sent under the generic search key.
    #[serde(rename = "Texto")]
    pub id_loja: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Loja {
    pub id_loja: Option<i64>,
    pub cod_filial: Option<i64>,
    pub filial_nome: Option<String>,
    pub cnpj: Option<i64>,
    pub cod_fornecedor: Option<i64>,
    pub inscricao_municipal: Option<i64>,
    #[serde(rename = "CEP")]
    pub cep: Option<i64>,
    pub tipo_lograd: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<i64>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    #[serde(rename = "UF")]
    pub uf: Option<String>,
    pub telefone: Option<String>,
    pub email_locacao: Option<String>,
    pub email_condominio: Option<String>,
    pub franquia: Option<String>,
}

/// `CADASTRO_TAREFA_INCLUIR`: create a task and return its code.
pub struct TarefaIncluir;

impl Action for TarefaIncluir {
    const NAME: &'static str = "CADASTRO_TAREFA_INCLUIR";
    type Input = TarefaIncluirInput;
    type Output = TarefaIncluirOutput;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TarefaIncluirInput {
    /// Login of the user the task is assigned to.
    pub alocada_para: String,
    pub cod_categoria: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_ticket: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_assunto: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assunto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_contato: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_contato: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texto_contato: Option<String>,
    pub data_previsao: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_conclusao: Option<String>,
    pub cod_situacao: i64,
    pub cod_prioridade: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_fornecedor: Option<i64>,
    /// Progress, `0` to `100`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentual: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor: Option<String>,
    /// Free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tem_lembrete: Option<SimNao>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lembrete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texto_lembrete: Option<String>,
    pub cod_origem: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_cod_origem: Option<i64>,
    pub tipo_origem: TipoOrigem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anexos: Option<Vec<AnexoTarefa>>,
}

/// File attached to a new task by URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnexoTarefa {
    pub descricao_arquivo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_arquivo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TarefaIncluirOutput {
    pub cod_tarefa: Option<i64>,
}
