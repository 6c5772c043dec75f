//! Receivables actions (`CTAREC_*`): bank slips.

use serde::{Deserialize, Serialize};

use super::{is_zero_f64, is_zero_i64};
use crate::action::Action;
use crate::types::SimNao;

/// `CTAREC_BOLETO_CONSULTAR`: printable data of one bank slip.
pub struct BoletoConsultar;

impl Action for BoletoConsultar {
    const NAME: &'static str = "CTAREC_BOLETO_CONSULTAR";
    type Input = BoletoConsultarInput;
    type Output = Boleto;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoletoConsultarInput {
    pub nosso_numero: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Boleto {
    pub origem_cobranca: Option<String>,
    pub doc_capa_id: Option<i64>,
    #[serde(rename = "DOCRetido")]
    pub doc_retido: Option<String>,
    pub cancelado: Option<String>,
    pub cod_pessoa: Option<i64>,
    pub cobr_reg_acordo_ver_parc_ant: Option<String>,
    pub id_acordo: Option<i64>,
    pub data_venc_acordo: Option<String>,
    pub filial_nome: Option<String>,
    pub filial_end: Option<String>,
    pub filial_cnpj: Option<String>,
    pub data_venc: Option<String>,
    pub data_pagamento: Option<String>,
    #[serde(rename = "TipoDOC")]
    pub tipo_doc: Option<String>,
    pub filial_cidade: Option<String>,
    pub id_cod_banco: Option<String>,
    pub linha_digitavel: Option<String>,
    pub pix_qr_code: Option<String>,
    pub vlr_documento: Option<f64>,
    pub nosso_numero_orig: Option<String>,
    pub local_pagamento: Option<String>,
    pub nome_cedente: Option<String>,
    pub cod_cedente: Option<String>,
    pub data_documento: Option<String>,
    pub data_processamento: Option<String>,
    #[serde(rename = "NumeroDOC")]
    pub numero_doc: Option<String>,
    pub nosso_numero: Option<String>,
    pub carteira: Option<String>,
    #[serde(rename = "EspecieDOC")]
    pub especie_doc: Option<String>,
    pub aceite: Option<String>,
    pub uso_banco: Option<String>,
    pub moeda: Option<String>,
    pub vlr_acresc_outr: Option<f64>,
    /// Preformatted by the backend.
    pub vlr_desconto: Option<String>,
    pub vlr_desc_outr: Option<f64>,
    /// Preformatted by the backend.
    pub vlr_multa: Option<String>,
    pub vlr_seg_cont: Option<f64>,
    pub sacado1: Option<String>,
    pub sacado2: Option<String>,
    pub sacado3: Option<String>,
    pub cod_barras: Option<String>,
    pub aviso: Option<String>,
    pub data_limite_pagamento: Option<String>,
    pub data_tira_inadimplencia: Option<String>,
    pub instrucoes: Option<Vec<String>>,
    pub detalhes: Option<Vec<String>>,
    /// Free-form blocks whose shape varies per slip layout.
    pub informativos: Option<Vec<serde_json::Value>>,
    pub cabecalhos: Option<Vec<String>>,
}

/// `CTAREC_BOLETO_QUITAR`: register the payment of a bank slip.
pub struct BoletoQuitar;

impl Action for BoletoQuitar {
    const NAME: &'static str = "CTAREC_BOLETO_QUITAR";
    type Input = BoletoQuitarInput;
    type Output = BoletoQuitarOutput;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoletoQuitarInput {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub origem_cobranca: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nosso_numero: String,
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub doc_capa_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_pagamento: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub origem_quitacao: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlr_juros: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlr_multa: Option<f64>,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub vlr_multa_administrativa: f64,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub vlr_desconto_administrativo: f64,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub vlr_acrescimo_outros: f64,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub vlr_desconto_proprietario: f64,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub vlr_descontos: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seguro_conteudo: Option<SimNao>,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub vlr_acrescimos: f64,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub vlr_pagamento: f64,
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub cod_banco: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub complemento: String,
    #[serde(rename = "IdAdmCCDeposito", skip_serializing_if = "Option::is_none")]
    pub id_adm_cc_deposito: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_deposito: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoletoQuitarOutput {
    pub garantiu_cond: Option<String>,
    #[serde(rename = "Nao_Multiplica_Coef")]
    pub nao_multiplica_coef: Option<String>,
    pub lancamentos: Option<Vec<Lancamento>>,
}

/// Ledger entry created by a settlement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Lancamento {
    pub numero_lancto: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boleto_decodes_mixed_value_types() {
        let boleto: Boleto = serde_json::from_str(
            r#"{"NossoNumero":"000123","VlrDocumento":350.5,"VlrMulta":"7,01",
                "TipoDOC":"BOL","DOCRetido":"N","Instrucoes":["Não receber após o vencimento"],
                "Informativos":[{"Linha":"Condomínio março"},"texto livre"]}"#,
        )
        .unwrap();
        assert_eq!(boleto.vlr_documento, Some(350.5));
        assert_eq!(boleto.vlr_multa.as_deref(), Some("7,01"));
        assert_eq!(boleto.tipo_doc.as_deref(), Some("BOL"));
        assert_eq!(boleto.informativos.map(|i| i.len()), Some(2));
        assert_eq!(boleto.cabecalhos, None);
    }

    #[test]
    fn quitar_omits_unset_and_zero_fields() {
        let input = BoletoQuitarInput {
            origem_cobranca: "C".to_string(),
            nosso_numero: "000123".to_string(),
            doc_capa_id: 77,
            data_pagamento: "2024-03-05".to_string(),
            origem_quitacao: "B".to_string(),
            vlr_pagamento: 350.5,
            cod_banco: 41,
            id_adm_cc_deposito: Some(9),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["VlrPagamento"], 350.5);
        assert!(json.get("VlrDescontos").is_none());
        assert!(json.get("Complemento").is_none());
        assert_eq!(json["IdAdmCCDeposito"], 9);
        assert!(json.get("VlrJuros").is_none());
        assert!(json.get("SeguroConteudo").is_none());
    }

    #[test]
    fn quitar_output_keeps_underscored_key() {
        let out: BoletoQuitarOutput = serde_json::from_str(
            r#"{"GarantiuCond":"N","Nao_Multiplica_Coef":"S","Lancamentos":[{"NumeroLancto":5001}]}"#,
        )
        .unwrap();
        assert_eq!(out.nao_multiplica_coef.as_deref(), Some("S"));
        assert_eq!(out.lancamentos.unwrap()[0].numero_lancto, Some(5001));
    }
}
