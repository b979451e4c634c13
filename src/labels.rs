//! Label Bundles
//!
//! All user-visible strings of the generated workbook, one `'static`
//! bundle per language. Rendering code never branches on the language
//! directly; it reads everything from the bundle.

use crate::types::Language;

/// Language-indexed strings for the three sheets.
#[derive(Debug)]
pub struct Labels {
    pub checklist_tab: &'static str,
    pub summary_tab: &'static str,
    pub instructions_tab: &'static str,
    /// Checklist header row, columns A..H.
    pub headers: [&'static str; 8],
    /// Status values, first value is the row default.
    pub statuses: [&'static str; 4],
    pub summary_title: &'static str,
    pub target: &'static str,
    pub transaction: &'static str,
    pub sector: &'static str,
    pub jurisdiction: &'static str,
    pub date_generated: &'static str,
    pub total_docs: &'static str,
    pub by_category: &'static str,
    pub by_priority: &'static str,
    pub category: &'static str,
    pub count: &'static str,
    pub priority: &'static str,
    pub instructions_title: &'static str,
    pub how_to_use: &'static str,
    pub how_to_use_items: [&'static str; 6],
    pub status_definitions: &'static str,
    pub status_def_headers: [&'static str; 2],
    pub status_defs: [(&'static str, &'static str); 4],
    pub timeline_title: &'static str,
    pub timeline_headers: [&'static str; 2],
    pub timeline_items: [(&'static str, &'static str); 6],
    pub contacts_title: &'static str,
    pub contacts_headers: [&'static str; 5],
    pub contacts_roles: [&'static str; 6],
}

impl Labels {
    /// Bundle for `language`.
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::En => &EN_LABELS,
            Language::Pt => &PT_LABELS,
        }
    }

    /// Default status assigned to every row at render time
    /// ("not yet started": Pending / Pendente).
    pub fn default_status(&self) -> &'static str {
        self.statuses[0]
    }
}

static EN_LABELS: Labels = Labels {
    checklist_tab: "Checklist",
    summary_tab: "Summary",
    instructions_tab: "Instructions",
    headers: [
        "Category",
        "Document Name",
        "Required",
        "Priority",
        "Received Date",
        "Status",
        "Responsible",
        "Comments",
    ],
    statuses: ["Pending", "Received", "Reviewed", "Missing"],
    summary_title: "Due Diligence — Summary",
    target: "Target Company",
    transaction: "Transaction Type",
    sector: "Sector",
    jurisdiction: "Jurisdiction",
    date_generated: "Date Generated",
    total_docs: "Total Documents",
    by_category: "Documents by Category",
    by_priority: "Documents by Priority",
    category: "Category",
    count: "Count",
    priority: "Priority",
    instructions_title: "Instructions",
    how_to_use: "How to Use This Checklist",
    how_to_use_items: [
        "1. Review all documents listed in the Checklist tab.",
        "2. For each document, update the Status column as you progress.",
        "3. Record the Received Date when the document is obtained.",
        "4. Assign a Responsible person for follow-up on each item.",
        "5. Use the Comments column for any observations, issues or follow-ups.",
        "6. Use the filters to focus on specific categories, priorities or statuses.",
    ],
    status_definitions: "Status Definitions",
    status_def_headers: ["Status", "Definition"],
    status_defs: [
        ("Pending", "Document has been requested but not yet received."),
        ("Received", "Document received but not yet reviewed by the DD team."),
        ("Reviewed", "Document reviewed; no further action needed."),
        ("Missing", "Document unavailable or target unable to provide."),
    ],
    timeline_title: "Indicative DD Timeline",
    timeline_headers: ["Phase", "Activities"],
    timeline_items: [
        ("Week 1-2", "Send initial document request list to target / advisors."),
        ("Week 2-4", "Receive and catalogue documents in virtual data room."),
        ("Week 3-6", "Detailed review by legal, financial and tax workstreams."),
        ("Week 5-7", "Follow-up requests and Q&A with management."),
        ("Week 7-8", "Draft DD reports and identify key findings / red flags."),
        ("Week 8-10", "Final DD reports issued; feed into SPA negotiation."),
    ],
    contacts_title: "Advisor Contacts",
    contacts_headers: ["Role", "Firm", "Contact Person", "Email", "Phone"],
    contacts_roles: [
        "Legal Advisor",
        "Financial Advisor",
        "Tax Advisor",
        "Environmental Advisor",
        "Insurance Advisor",
        "IT / Cyber Advisor",
    ],
};

static PT_LABELS: Labels = Labels {
    checklist_tab: "Checklist",
    summary_tab: "Resumo",
    instructions_tab: "Instruções",
    headers: [
        "Categoria",
        "Nome do Documento",
        "Obrigatório",
        "Prioridade",
        "Data de Receção",
        "Estado",
        "Responsável",
        "Comentários",
    ],
    statuses: ["Pendente", "Recebido", "Revisto", "Em falta"],
    summary_title: "Due Diligence — Resumo",
    target: "Empresa-alvo",
    transaction: "Tipo de Transação",
    sector: "Setor",
    jurisdiction: "Jurisdição",
    date_generated: "Data de Geração",
    total_docs: "Total de Documentos",
    by_category: "Documentos por Categoria",
    by_priority: "Documentos por Prioridade",
    category: "Categoria",
    count: "Contagem",
    priority: "Prioridade",
    instructions_title: "Instruções",
    how_to_use: "Como Usar Esta Checklist",
    how_to_use_items: [
        "1. Reveja todos os documentos listados no separador Checklist.",
        "2. Para cada documento, atualize a coluna Estado à medida que avança.",
        "3. Registe a Data de Receção quando o documento for obtido.",
        "4. Atribua um Responsável pelo acompanhamento de cada item.",
        "5. Use a coluna Comentários para observações, questões ou seguimentos.",
        "6. Utilize os filtros para focar em categorias, prioridades ou estados específicos.",
    ],
    status_definitions: "Definições de Estado",
    status_def_headers: ["Estado", "Definição"],
    status_defs: [
        ("Pendente", "Documento solicitado mas ainda não recebido."),
        ("Recebido", "Documento recebido mas ainda não revisto pela equipa de DD."),
        ("Revisto", "Documento revisto; sem ações adicionais necessárias."),
        ("Em falta", "Documento indisponível ou o target não consegue fornecer."),
    ],
    timeline_title: "Timeline Indicativo de DD",
    timeline_headers: ["Fase", "Atividades"],
    timeline_items: [
        ("Semana 1-2", "Enviar lista inicial de pedidos de documentos ao target / assessores."),
        ("Semana 2-4", "Receção e catalogação de documentos no data room virtual."),
        ("Semana 3-6", "Revisão detalhada pelas workstreams legal, financeira e fiscal."),
        ("Semana 5-7", "Pedidos de follow-up e Q&A com a gestão."),
        ("Semana 7-8", "Elaboração de relatórios de DD e identificação de red flags."),
        ("Semana 8-10", "Relatórios finais de DD; alimentar negociação do SPA."),
    ],
    contacts_title: "Contactos dos Assessores",
    contacts_headers: ["Função", "Firma", "Pessoa de Contacto", "Email", "Telefone"],
    contacts_roles: [
        "Assessor Jurídico",
        "Assessor Financeiro",
        "Assessor Fiscal",
        "Assessor Ambiental",
        "Assessor de Seguros",
        "Assessor TI / Cyber",
    ],
};
