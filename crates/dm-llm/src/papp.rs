//! PAPP (Plano de Ação de Processamento Profundo): a 7-day deep-processing
//! action plan generated from a VAK profile.

use dm_core::entities::{ActionPlan, PlanDay, ProfileInput};
use dm_core::responses::PlanOutcome;

use crate::client::{GenerationRequest, RetryPolicy, TextGenerator, generate_with_retry};
use crate::error::LlmError;
use crate::recovery::parse_json_reply;

pub const SYSTEM_PROMPT: &str = "Você é um Neurocientista Cognitivo e Coach de Aprendizagem. \
    Sua tarefa é criar um Plano de Ação de Processamento Profundo (PAPP) de 7 dias. \
    O plano deve ser baseado no perfil de comunicação VAK do usuário e em seu objetivo. \
    O PAPP deve focar em técnicas de aprendizado ativo e processamento profundo \
    (como elaboração, auto-explicação, e prática de recuperação), e não apenas no estilo \
    preferido. O resultado DEVE ser um objeto JSON válido no formato: \
    {'title': str, 'introduction': str, 'days': [{'day': int, 'theme': str, 'task': str}, ...]}. \
    A tarefa deve ser prática e acionável.";

/// System and user prompt for one PAPP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PappPrompts {
    pub system: String,
    pub user: String,
}

/// Build the prompts for `profile`.
///
/// The goal is interpolated verbatim. Non-empty `trend_keywords` are appended
/// as extra context.
#[must_use]
pub fn build_prompts(profile: &ProfileInput, trend_keywords: &[String]) -> PappPrompts {
    let mut user = format!(
        "Crie um PAPP de 7 dias. Perfil: Visual: {}%, Auditivo: {}%, Cinestésico: {}%. \
         Objetivo do usuário: '{}'. \
         Foque em aplicar o processamento profundo para atingir o objetivo, \
         usando as modalidades como ferramentas de engajamento.",
        profile.visual, profile.auditory, profile.kinesthetic, profile.goal
    );
    if !trend_keywords.is_empty() {
        user.push_str(" Tendências de pesquisa recentes a considerar: ");
        user.push_str(&trend_keywords.join(", "));
        user.push('.');
    }
    PappPrompts {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}

/// Offline plan used when no real endpoint is configured.
#[must_use]
pub fn simulated_plan(profile: &ProfileInput) -> ActionPlan {
    const DAYS: [(&str, &str); 7] = [
        (
            "Foco na Atenção",
            "Simulação: Revise anotações usando cores e diagramas (Visual).",
        ),
        (
            "Processamento Auditivo",
            "Simulação: Transforme o conteúdo do dia 1 em um podcast curto (Auditivo).",
        ),
        (
            "Aprendizagem Ativa",
            "Simulação: Construa um modelo físico ou faça um role-play (Cinestésico).",
        ),
        (
            "Revisão e Conexão",
            "Simulação: Escreva um resumo à mão (Leitura/Escrita).",
        ),
        (
            "Feedback e Ajuste",
            "Simulação: Peça a um amigo para testar seu conhecimento (Interpessoal).",
        ),
        (
            "Processamento Profundo",
            "Simulação: Crie uma metáfora complexa para o tema (Elaboração).",
        ),
        (
            "Consolidação",
            "Simulação: Medite sobre o que aprendeu, focando na emoção (Emocional/Cognitivo).",
        ),
    ];

    ActionPlan {
        title: format!(
            "Plano de Ação (Simulado) para Perfil Visual: {}%",
            profile.visual
        ),
        introduction: "Este é um plano de ação simulado. Para um plano real, configure a chave \
                       da API OpenAI."
            .to_string(),
        days: (1..)
            .zip(DAYS)
            .map(|(day, (theme, task))| PlanDay {
                day,
                theme: theme.to_string(),
                task: task.to_string(),
            })
            .collect(),
    }
}

/// Serialized [`simulated_plan`], the fixture backend's default reply.
#[must_use]
pub fn simulated_reply(profile: &ProfileInput) -> String {
    serde_json::to_string(&simulated_plan(profile)).unwrap_or_default()
}

/// Generates PAPPs through a [`TextGenerator`].
#[derive(Debug)]
pub struct PappPlanner<G> {
    generator: G,
    model: String,
    retry: RetryPolicy,
    trend_keywords: Vec<String>,
}

impl<G: TextGenerator> PappPlanner<G> {
    #[must_use]
    pub fn new(generator: G, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
            retry: RetryPolicy::none(),
            trend_keywords: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Research keywords appended to every prompt.
    #[must_use]
    pub fn with_trend_keywords(mut self, keywords: Vec<String>) -> Self {
        self.trend_keywords = keywords;
        self
    }

    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Generate a plan for `profile`.
    ///
    /// Never fails: any error is returned as [`PlanOutcome::Failed`].
    pub async fn generate(&self, profile: &ProfileInput) -> PlanOutcome {
        if !profile.is_balanced() {
            tracing::warn!(
                total = profile.total(),
                "profile percentages do not add up to 100"
            );
        }
        match self.try_generate(profile).await {
            Ok(plan) => {
                tracing::info!(days = plan.days.len(), "PAPP generated");
                PlanOutcome::Planned(plan)
            }
            Err(error) => {
                tracing::warn!(kind = %error.kind(), %error, "PAPP generation failed");
                PlanOutcome::Failed(error.to_failure_report())
            }
        }
    }

    async fn try_generate(&self, profile: &ProfileInput) -> Result<ActionPlan, LlmError> {
        let prompts = build_prompts(profile, &self.trend_keywords);
        let request = GenerationRequest {
            model: self.model.clone(),
            system: prompts.system,
            user: prompts.user,
            json_response: true,
            temperature: None,
            max_tokens: None,
        };
        let raw = generate_with_retry(&self.generator, &request, self.retry).await?;
        parse_json_reply(&raw)
    }
}
