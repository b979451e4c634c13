//! Reference Catalogs
//!
//! Process-wide constant tables of bilingual document definitions: the
//! core catalog (applicable to every transaction), one table per sector
//! and one per deal type. The tables are language-agnostic; the display
//! name is selected at assembly time.
//!
//! Sector and deal-type lookup is an exhaustive `match`, so every enum
//! variant is guaranteed a table at compile time and unknown keys cannot
//! occur.

use crate::types::{Category as C, DealType, Language, Priority as P, Sector};

/// One bilingual catalog row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CatalogDoc {
    pub category: C,
    pub name_en: &'static str,
    pub name_pt: &'static str,
    pub required: bool,
    pub priority: P,
}

impl CatalogDoc {
    /// Display name in the requested language.
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.name_en,
            Language::Pt => self.name_pt,
        }
    }
}

const fn doc(
    category: C,
    name_en: &'static str,
    name_pt: &'static str,
    required: bool,
    priority: P,
) -> CatalogDoc {
    CatalogDoc {
        category,
        name_en,
        name_pt,
        required,
        priority,
    }
}

/// Documents requested in every transaction, regardless of sector or
/// deal type.
pub(crate) const CORE_DOCUMENTS: &[CatalogDoc] = &[
    doc(C::Legal, "Articles of Association / By-laws", "Estatutos / Pacto Social", true, P::High),
    doc(C::Legal, "Certificate of Incorporation", "Certidão Permanente", true, P::High),
    doc(C::Legal, "Board minutes (last 3 years)", "Atas de assembleia (últimos 3 anos)", true, P::High),
    doc(C::Legal, "Powers of Attorney in force", "Procurações em vigor", true, P::Medium),
    doc(C::Legal, "Pending / threatened litigation", "Litígios pendentes / ameaçados", true, P::High),
    doc(C::Legal, "Regulatory licences & permits", "Licenças e alvarás regulatórios", true, P::High),
    doc(C::Financial, "Audited Financial Statements (3 years)", "Demonstrações Financeiras auditadas (3 anos)", true, P::High),
    doc(C::Financial, "Management accounts (YTD)", "Balancetes de gestão (YTD)", true, P::High),
    doc(C::Financial, "Budget / Forecasts", "Orçamento / Projeções", true, P::Medium),
    doc(C::Financial, "Debt schedule & loan agreements", "Mapa de dívida e contratos de empréstimo", true, P::High),
    doc(C::Financial, "Bank statements (12 months)", "Extratos bancários (12 meses)", true, P::Medium),
    doc(C::Financial, "Accounts receivable & payable aging", "Aging de contas a receber e a pagar", true, P::Medium),
    doc(C::Tax, "Corporate tax returns (3 years)", "Declarações IRC (3 anos)", true, P::High),
    doc(C::Tax, "VAT returns (3 years)", "Declarações IVA (3 anos)", true, P::High),
    doc(C::Tax, "Tax assessments / disputes", "Avaliações / litígios fiscais", true, P::High),
    doc(C::Tax, "Transfer pricing documentation", "Documentação de preços de transferência", false, P::Medium),
    doc(C::Hr, "Employee list with terms", "Lista de colaboradores com condições", true, P::High),
    doc(C::Hr, "Employment contracts (key personnel)", "Contratos de trabalho (pessoal-chave)", true, P::High),
    doc(C::Hr, "Collective bargaining agreements", "Convenções coletivas de trabalho", true, P::Medium),
    doc(C::Hr, "Pension / benefit plans", "Planos de pensões / benefícios", true, P::Medium),
    doc(C::Hr, "Organizational chart", "Organograma", true, P::Low),
    doc(C::Commercial, "Top 10 customer contracts", "Contratos dos 10 maiores clientes", true, P::High),
    doc(C::Commercial, "Top 10 supplier contracts", "Contratos dos 10 maiores fornecedores", true, P::High),
    doc(C::Commercial, "Material contracts summary", "Resumo de contratos materiais", true, P::High),
    doc(C::Compliance, "Data protection / GDPR policies", "Políticas de proteção de dados / RGPD", true, P::High),
    doc(C::Compliance, "Anti-money laundering policies", "Políticas de prevenção de branqueamento", false, P::Medium),
    doc(C::Compliance, "Insurance policies schedule", "Mapa de apólices de seguro", true, P::High),
    doc(C::Compliance, "Insurance claims history", "Histórico de sinistros", false, P::Medium),
];

const HEALTHCARE_DOCUMENTS: &[CatalogDoc] = &[
    doc(C::Compliance, "Medical / healthcare operating licences", "Licenças de atividade médica / saúde", true, P::High),
    doc(C::Compliance, "Patient data compliance (GDPR health data)", "Conformidade dados de pacientes (RGPD dados de saúde)", true, P::High),
    doc(C::Operational, "Equipment certifications & calibration logs", "Certificações de equipamentos e registos de calibração", true, P::High),
    doc(C::Compliance, "Clinical trial authorizations", "Autorizações de ensaios clínicos", false, P::Medium),
    doc(C::Compliance, "Pharmacy / drug distribution licences", "Licenças de farmácia / distribuição de medicamentos", false, P::High),
    doc(C::Hr, "Medical staff credentials & licences", "Credenciais e cédulas profissionais do pessoal médico", true, P::High),
    doc(C::Operational, "Health & safety inspection reports", "Relatórios de inspeção de saúde e segurança", true, P::Medium),
    doc(C::Compliance, "Agreements with national health service", "Acordos com o Serviço Nacional de Saúde", false, P::Medium),
];

const TECHNOLOGY_DOCUMENTS: &[CatalogDoc] = &[
    doc(C::Ip, "IP portfolio (patents, trademarks, domains)", "Portfólio de PI (patentes, marcas, domínios)", true, P::High),
    doc(C::Ip, "Software licence agreements (inbound)", "Contratos de licença de software (inbound)", true, P::High),
    doc(C::Ip, "Software licence agreements (outbound / SaaS)", "Contratos de licença de software (outbound / SaaS)", true, P::High),
    doc(C::Ip, "Source code escrow agreements", "Contratos de escrow de código-fonte", false, P::Medium),
    doc(C::Ip, "Open source software audit", "Auditoria de software open source", true, P::High),
    doc(C::Commercial, "SaaS / subscription metrics (ARR, churn, LTV)", "Métricas SaaS / subscrição (ARR, churn, LTV)", true, P::High),
    doc(C::Operational, "IT infrastructure & security audit", "Auditoria de infraestrutura TI e segurança", true, P::High),
    doc(C::Compliance, "Data breach history & incident response plan", "Histórico de violações de dados e plano de resposta", true, P::Medium),
    doc(C::Hr, "Key developer / tech talent retention plans", "Planos de retenção de talento tecnológico-chave", false, P::Medium),
    doc(C::Commercial, "Customer contracts with SLA details", "Contratos de clientes com detalhe de SLA", true, P::Medium),
];

const INDUSTRIAL_DOCUMENTS: &[CatalogDoc] = &[
    doc(C::Compliance, "Environmental permits & impact assessments", "Licenças ambientais e avaliações de impacto", true, P::High),
    doc(C::Compliance, "Health & Safety certifications (ISO 45001)", "Certificações de Saúde e Segurança (ISO 45001)", true, P::High),
    doc(C::Operational, "Equipment maintenance logs", "Registos de manutenção de equipamentos", true, P::Medium),
    doc(C::Operational, "Production capacity reports", "Relatórios de capacidade produtiva", true, P::Medium),
    doc(C::Compliance, "Environmental remediation obligations", "Obrigações de remediação ambiental", true, P::High),
    doc(C::Operational, "Supply chain / logistics contracts", "Contratos de cadeia de abastecimento / logística", true, P::Medium),
    doc(C::Compliance, "Quality management certifications (ISO 9001)", "Certificações de gestão de qualidade (ISO 9001)", true, P::Medium),
    doc(C::Operational, "Fixed asset register with valuations", "Registo de ativos fixos com avaliações", true, P::High),
];

const REAL_ESTATE_DOCUMENTS: &[CatalogDoc] = &[
    doc(C::Legal, "Property title deeds / Certidões prediais", "Escrituras de propriedade / Certidões prediais", true, P::High),
    doc(C::Legal, "Land registry certificates", "Certidões do registo predial", true, P::High),
    doc(C::Commercial, "Lease agreements (tenant schedule)", "Contratos de arrendamento (mapa de inquilinos)", true, P::High),
    doc(C::Legal, "Building permits & occupancy licences", "Licenças de construção e utilização", true, P::High),
    doc(C::Financial, "Independent property valuations", "Avaliações independentes de imóveis", true, P::High),
    doc(C::Compliance, "Environmental site assessments", "Avaliações ambientais dos imóveis", true, P::Medium),
    doc(C::Operational, "Property management contracts", "Contratos de gestão de propriedades", true, P::Medium),
    doc(C::Financial, "Rental income schedule & vacancy rates", "Mapa de rendas e taxas de desocupação", true, P::High),
    doc(C::Legal, "Easements, encumbrances & restrictions", "Servidões, ónus e restrições", true, P::High),
];

const FINANCIAL_SERVICES_DOCUMENTS: &[CatalogDoc] = &[
    doc(C::Compliance, "Regulatory licences (Central Bank / CMVM / ASF)", "Licenças regulatórias (Banco de Portugal / CMVM / ASF)", true, P::High),
    doc(C::Compliance, "Capital adequacy / solvency reports", "Relatórios de adequação de capital / solvência", true, P::High),
    doc(C::Compliance, "AML / KYC policies & procedures", "Políticas e procedimentos AML / KYC", true, P::High),
    doc(C::Compliance, "Regulatory inspection reports", "Relatórios de inspeções regulatórias", true, P::High),
    doc(C::Financial, "Loan / credit portfolio analysis", "Análise da carteira de crédito", true, P::High),
    doc(C::Financial, "Provision / impairment schedules", "Mapas de provisões / imparidades", true, P::High),
    doc(C::Compliance, "Compliance officer reports (2 years)", "Relatórios do compliance officer (2 anos)", true, P::Medium),
    doc(C::Operational, "IT systems & cybersecurity audit", "Auditoria de sistemas TI e cibersegurança", true, P::High),
    doc(C::Compliance, "Client complaints register", "Registo de reclamações de clientes", false, P::Medium),
];

const RETAIL_DOCUMENTS: &[CatalogDoc] = &[
    doc(C::Commercial, "Franchise / distribution agreements", "Contratos de franquia / distribuição", true, P::High),
    doc(C::Commercial, "E-commerce platform details & metrics", "Detalhes e métricas da plataforma e-commerce", false, P::Medium),
    doc(C::Legal, "Store lease agreements", "Contratos de arrendamento de lojas", true, P::High),
    doc(C::Ip, "Brand / trademark registrations", "Registos de marca", true, P::High),
    doc(C::Operational, "Inventory management reports", "Relatórios de gestão de inventário", true, P::Medium),
    doc(C::Commercial, "Loyalty programme details", "Detalhes do programa de fidelização", false, P::Low),
    doc(C::Compliance, "Consumer protection compliance", "Conformidade com proteção do consumidor", true, P::Medium),
    doc(C::Operational, "Store network profitability analysis", "Análise de rentabilidade da rede de lojas", true, P::High),
];

const ASSET_DEAL_DOCUMENTS: &[CatalogDoc] = &[
    doc(C::Legal, "Detailed asset list with descriptions", "Lista detalhada de ativos com descrições", true, P::High),
    doc(C::Legal, "Asset transfer agreements (drafts)", "Contratos de transferência de ativos (minutas)", true, P::High),
    doc(C::Legal, "Third-party consents for asset transfer", "Consentimentos de terceiros para transferência de ativos", true, P::High),
    doc(C::Tax, "Tax implications analysis of asset transfer", "Análise de implicações fiscais da transferência de ativos", true, P::High),
    doc(C::Financial, "Asset valuations / appraisals", "Avaliações de ativos", true, P::High),
    doc(C::Legal, "Assumed vs excluded liabilities schedule", "Mapa de passivos assumidos vs excluídos", true, P::High),
];

const SHARE_DEAL_DOCUMENTS: &[CatalogDoc] = &[
    doc(C::Legal, "Shareholder agreements", "Acordos parassociais", true, P::High),
    doc(C::Legal, "Share certificates", "Títulos de participação / certificados de ações", true, P::High),
    doc(C::Legal, "Capitalisation table (Cap table)", "Tabela de capitalização (Cap table)", true, P::High),
    doc(C::Legal, "Share transfer restrictions / pre-emption rights", "Restrições de transmissão de ações / direitos de preferência", true, P::High),
    doc(C::Legal, "Drag-along / tag-along provisions", "Cláusulas de drag-along / tag-along", true, P::Medium),
    doc(C::Legal, "Minority shareholder rights", "Direitos de acionistas minoritários", true, P::Medium),
    doc(C::Financial, "Dividend history & policy", "Histórico e política de dividendos", true, P::Medium),
    doc(C::Legal, "Stock option / warrant agreements", "Contratos de stock options / warrants", false, P::Medium),
];

const MERGER_DOCUMENTS: &[CatalogDoc] = &[
    doc(C::Legal, "Merger plan / projeto de fusão", "Projeto de fusão", true, P::High),
    doc(C::Financial, "Fairness opinion", "Fairness opinion", true, P::High),
    doc(C::Legal, "Exchange ratio justification", "Fundamentação da relação de troca", true, P::High),
    doc(C::Legal, "Merger filing / regulatory notifications", "Notificações regulatórias da fusão", true, P::High),
    doc(C::Compliance, "Competition / antitrust analysis", "Análise concorrencial / antitrust", true, P::High),
    doc(C::Legal, "Creditor notification process documentation", "Documentação do processo de notificação de credores", true, P::High),
    doc(C::Hr, "Integration plan (key personnel)", "Plano de integração (pessoal-chave)", true, P::Medium),
    doc(C::Financial, "Synergies analysis", "Análise de sinergias", true, P::Medium),
];

/// Sector-specific documents for `sector`.
pub(crate) fn sector_documents(sector: Sector) -> &'static [CatalogDoc] {
    match sector {
        Sector::Healthcare => HEALTHCARE_DOCUMENTS,
        Sector::Technology => TECHNOLOGY_DOCUMENTS,
        Sector::Industrial => INDUSTRIAL_DOCUMENTS,
        Sector::RealEstate => REAL_ESTATE_DOCUMENTS,
        Sector::FinancialServices => FINANCIAL_SERVICES_DOCUMENTS,
        Sector::Retail => RETAIL_DOCUMENTS,
    }
}

/// Deal-type-specific documents for `deal_type`.
pub(crate) fn deal_documents(deal_type: DealType) -> &'static [CatalogDoc] {
    match deal_type {
        DealType::AssetDeal => ASSET_DEAL_DOCUMENTS,
        DealType::ShareDeal => SHARE_DEAL_DOCUMENTS,
        DealType::Merger => MERGER_DOCUMENTS,
    }
}
