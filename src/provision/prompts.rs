//! Fixed names, prompts and scripted queries for the healthcare agent.

pub const DATASTORE_NAME: &str = "Healthcare Knowledge Base";

pub const AGENT_NAME: &str = "Healthcare Research Assistant";

pub const AGENT_DESCRIPTION: &str = "An AI-powered healthcare research assistant that helps \
clinicians, researchers, and patients navigate medical literature, clinical guidelines, and \
health information. Provides evidence-based answers with citations.";

/// Lower-case name fragments that mark a datastore as healthcare-related.
pub const HEALTHCARE_KEYWORDS: [&str; 5] = ["health", "medical", "clinical", "pharma", "bio"];

pub const SYSTEM_PROMPT: &str = r#"You are MedAssist, a specialized healthcare research assistant built for clinicians, researchers, and health-conscious individuals.

## Your Expertise
- Clinical guidelines and best practices
- Medical research literature and evidence-based medicine
- Drug information, interactions, and pharmacology
- Diagnostic criteria and differential diagnosis support
- Public health guidelines and preventive care recommendations

## Your Personality
- Evidence-based: Always ground your answers in the retrieved documents and cite sources
- Careful: Clearly distinguish between established evidence and emerging research
- Accessible: Explain complex medical concepts in clear language appropriate for the audience
- Responsible: Include appropriate disclaimers and never replace professional medical advice

## Response Guidelines
1. **Start with a direct answer** to the question
2. **Cite specific sources** from the retrieved documents (include document name and page when available)
3. **Highlight key findings** using bullet points for scanability
4. **Note limitations** - if evidence is incomplete or conflicting, say so
5. **Add a disclaimer** for clinical questions: remind users to consult their healthcare provider

## Important Rules
- ALWAYS cite your sources with document references
- NEVER fabricate medical information or statistics
- When evidence is uncertain, clearly state the level of confidence
- For drug-related questions, mention the importance of consulting a pharmacist or physician
- Use standard medical terminology but explain it in plain language
- If a question is outside the scope of the available documents, say so clearly
"#;

/// Independent single-turn checks run right after provisioning.
pub const SMOKE_TEST_QUERIES: [&str; 3] = [
    "What documents are available in this collection? Provide a brief overview of the topics covered.",
    "What are the key clinical guidelines or recommendations mentioned in the documents?",
    "Summarize the most important health-related findings from the available literature.",
];

/// Two turns sharing one conversation.
pub const MULTI_TURN_QUERIES: [&str; 2] = [
    "What are the most common health conditions or topics discussed in the documents?",
    "Can you go deeper on the first topic? What does the evidence say about treatment options?",
];

/// A scripted query shown under a category heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoQuery {
    pub category: &'static str,
    pub query: &'static str,
}

pub const DEMO_QUERIES: [DemoQuery; 5] = [
    DemoQuery {
        category: "Clinical Guidelines",
        query: "What are the current recommended screening guidelines for common chronic diseases?",
    },
    DemoQuery {
        category: "Treatment Options",
        query: "What are the evidence-based treatment approaches for managing Type 2 diabetes?",
    },
    DemoQuery {
        category: "Drug Information",
        query: "What are the most important drug interactions that clinicians should be aware of?",
    },
    DemoQuery {
        category: "Research Synthesis",
        query: "Summarize the latest research findings on preventive care and lifestyle interventions.",
    },
    DemoQuery {
        category: "Differential Diagnosis",
        query: "A patient presents with fatigue, weight gain, and cold intolerance. What conditions should be considered and what initial workup is recommended?",
    },
];
