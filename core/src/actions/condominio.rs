//! Condominium actions (`CONDOM_*`).

use serde::{Deserialize, Serialize};

use super::is_zero_i64;
use crate::action::Action;
use crate::types::{Bloco, Classificacao, Conselho, SimNao};

/// `CONDOM_CONDOMINIO_CONSULTAR`: full record of one condominium.
pub struct CondominioConsultar;

impl Action for CondominioConsultar {
    const NAME: &'static str = "CONDOM_CONDOMINIO_CONSULTAR";
    type Input = CondominioConsultarInput;
    type Output = Condominio;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CondominioConsultarInput {
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub cod_condominio: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Condominio {
    pub cod_condominio: Option<i64>,
    pub nome_condominio: Option<String>,
    #[serde(rename = "CNPJ")]
    pub cnpj: Option<i64>,
    pub total_fracao: Option<f64>,
    pub totalde_blocos: Option<i64>,
    pub dia_vencimento_doc: Option<i64>,
    /// Competence of the last generated bill, `YYYYMM`.
    pub ultima_competencia_doc: Option<String>,
    pub cod_bloco_base: Option<String>,
    pub ativo: Option<String>,
    pub data_inicio_adm: Option<String>,
    pub endereco_principal: Option<String>,
    pub cidade: Option<String>,
    #[serde(rename = "UF")]
    pub uf: Option<String>,
    pub assessor: Option<String>,
    pub assessor_nome: Option<String>,
    pub loja_nome: Option<String>,
    pub bloqueio_pagamento: Option<String>,
    pub data_distrato: Option<String>,
    pub categoria: Option<String>,
    pub classificacao: Option<Classificacao>,
    pub blocos: Option<Vec<Bloco>>,
    pub cod_advogado_inad: Option<i64>,
    pub nome_advogado_inad: Option<String>,
    pub honorario_dias: Option<i64>,
    pub honorario_percentual: Option<f64>,
}

/// `CONDOM_CONDOMINIO_PESQUISAR`: search condominiums by text.
pub struct CondominioPesquisar;

impl Action for CondominioPesquisar {
    const NAME: &'static str = "CONDOM_CONDOMINIO_PESQUISAR";
    type Input = CondominioPesquisarInput;
    type Output = CondominioPesquisarOutput;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CondominioPesquisarInput {
    /// Empty or absent selects everything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texto: Option<String>,
    // The backend spells this key without the second "d".
    #[serde(rename = "Ordenaror", skip_serializing_if = "Option::is_none")]
    pub ordenar_por: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pesquisar_por: Option<String>,
    pub inclui_inativos: SimNao,
    /// Page size; `0` or absent returns every row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qtde_linhas: Option<i64>,
    /// Ask for the next page of the previous search instead of searching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximas_linhas: Option<SimNao>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CondominioPesquisarOutput {
    pub condominios: Option<Vec<CondominioResumo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CondominioResumo {
    pub cod_condominio: Option<i64>,
    pub nome_condominio: Option<String>,
    pub endereco: Option<String>,
}

/// `CONDOM_LISTA_ECONOMIAS`: blocks and units of a condominium with their
/// owners.
pub struct ListaEconomias;

impl Action for ListaEconomias {
    const NAME: &'static str = "CONDOM_LISTA_ECONOMIAS";
    type Input = ListaEconomiasInput;
    type Output = ListaEconomiasOutput;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListaEconomiasInput {
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub cod_condominio: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_bloco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_alteracao_inicial: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListaEconomiasOutput {
    pub cod_condominio: Option<i64>,
    pub nome_condominio: Option<String>,
    pub cod_bloco_base: Option<String>,
    pub cod_filial: Option<i64>,
    pub dia_vencimento_doc: Option<i64>,
    pub assessor: Option<String>,
    pub assessor_email: Option<String>,
    pub assessor_agencia: Option<String>,
    pub totalde_economias: Option<i64>,
    pub totalde_blocos: Option<i64>,
    pub blocos: Option<Vec<BlocoEconomias>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlocoEconomias {
    pub cod_bloco: Option<String>,
    pub nome_bloco: Option<String>,
    pub qtde_economias: Option<i64>,
    pub endereco: Option<String>,
    pub bairro: Option<String>,
    #[serde(rename = "CEP")]
    pub cep: Option<i64>,
    pub nome_sindico: Option<String>,
    pub email_sindico: Option<String>,
    #[serde(rename = "CPFSindico")]
    pub cpf_sindico: Option<String>,
    pub valor_gas: Option<f64>,
    pub valor_agua: Option<f64>,
    pub economias: Option<Vec<Economia>>,
    pub conselho: Option<Vec<Conselho>>,
}

/// A unit (apartment, shop) of a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Economia {
    pub id_economia: Option<i64>,
    pub cod_economia: Option<String>,
    pub cod_pessoa_condomino: Option<i64>,
    pub nome: Option<String>,
    pub celular: Option<String>,
    pub fracao: Option<f64>,
    pub email: Option<String>,
    pub locatario: Option<String>,
    pub contato: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub enderecos: Option<Vec<EnderecoCondomino>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnderecoCondomino {
    pub tipo_endereco: Option<String>,
    // Misspelled on the wire.
    #[serde(rename = "Enderereco")]
    pub endereco: Option<String>,
    pub cidade: Option<String>,
    pub bairro: Option<String>,
    #[serde(rename = "CEP")]
    pub cep: Option<i64>,
    #[serde(rename = "UF")]
    pub uf: Option<String>,
    pub telefone1: Option<String>,
    pub telefone2: Option<String>,
}

/// `CONDOM_LISTA_INADIMPLENCIAS`: overdue bills of a condominium, a block
/// or a single unit.
pub struct ListaInadimplencias;

impl Action for ListaInadimplencias {
    const NAME: &'static str = "CONDOM_LISTA_INADIMPLENCIAS";
    type Input = ListaInadimplenciasInput;
    type Output = ListaInadimplenciasOutput;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListaInadimplenciasInput {
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub cod_condominio: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_bloco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_economia: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incluir_docs_acordo: Option<SimNao>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incluir_obs_inadimplencia: Option<SimNao>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incluir_garantidos_inadimplencia: Option<SimNao>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListaInadimplenciasOutput {
    pub inadimplentes: Option<Vec<Inadimplente>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Inadimplente {
    pub data_vencimento: Option<String>,
    pub cod_bloco: Option<String>,
    pub economia: Option<String>,
    pub descr_classe_imovel: Option<String>,
    pub id_economia: Option<i64>,
    pub cod_pessoa: Option<i64>,
    pub nome: Option<String>,
    pub nosso_numero: Option<String>,
    #[serde(rename = "TipoDOC")]
    pub tipo_doc: Option<String>,
    pub competencia: Option<String>,
    pub vlr_documento: Option<f64>,
    pub vlr_corrigido: Option<f64>,
    pub multa: Option<f64>,
    pub juros: Option<f64>,
    pub correcao: Option<f64>,
    pub vlr_honorarios: Option<f64>,
    pub vlr_custas: Option<f64>,
    pub vlr_total: Option<f64>,
    #[serde(rename = "ObsJur_NomeAdv")]
    pub obs_jur_nome_adv: Option<String>,
    pub observacoes_juridicas: Option<Vec<ObservacaoJuridica>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObservacaoJuridica {
    pub observacao: Option<String>,
}
