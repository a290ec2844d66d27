//! The Kinevo app summary, in Portuguese.

use crate::document::Document;
use crate::info::Info;
use crate::units::Px;

const SECTION_GAP: Px = Px(14.0);
const LIST_GAP: Px = Px(10.0);

/// The one-page summary of the Kinevo monorepo
pub fn kinevo_summary() -> Document {
    let mut doc = Document::new();
    doc.set_info(
        Info::new()
            .with_title("Resumo do App Kinevo")
            .with_subject("Resumo do App Kinevo (baseado no repositório)")
            .with_keywords("Kinevo, SaaS, treino, Supabase, Stripe")
            .with_author("Kinevo"),
    );

    doc.title("Resumo do App Kinevo (baseado no repositório)");

    doc.heading("O que é")
        .paragraph(
            "Kinevo é um monorepo SaaS de treino com aplicação Web para treinadores e app Mobile \
             para alunos.",
        )
        .paragraph(
            "O repositório mostra integração com Supabase, módulo financeiro com Stripe e pacote \
             compartilhado de tipos.",
        )
        .gap(SECTION_GAP);

    doc.heading("Para quem é")
        .paragraph(
            "Persona primária: treinadores e personal trainers que gerenciam alunos e prescrevem \
             treinos no painel Web.",
        )
        .gap(SECTION_GAP);

    doc.heading("O que faz")
        .bullets([
            "Autenticação e proteção de rotas no Web com Supabase Auth e middleware.",
            "Gestão de alunos, programas e biblioteca de exercícios no painel do treinador.",
            "Execução de treino em sala de treino com carga anterior e registro de séries.",
            "Módulo de formulários com templates, inbox e geração com IA com fallback heurístico.",
            "Módulo financeiro com planos, assinaturas, checkout e webhooks Stripe.",
            "App Mobile para aluno com Home, treino, histórico, inbox e perfil.",
            "Integração com Apple Watch e Live Activity no workspace mobile.",
        ])
        .gap(LIST_GAP);

    doc.heading("Como funciona (arquitetura compacta)")
        .bullets([
            "Frontends: Next.js (web/src/app) para treinador e Expo Router (mobile/app) para aluno.",
            "Backend: Supabase (Auth + banco + RLS) evidenciado por clientes Supabase e migrações \
             SQL em supabase/migrations.",
            "Serviços: Stripe via API routes/actions em web/src/app/api e \
             web/src/actions/financial; OpenAI em web/src/actions/forms.",
            "Contrato compartilhado: pacote @kinevo/shared com tipos e utilitários usados por Web \
             e Mobile.",
            "Fluxo: treinador prescreve no Web -> dados no Supabase -> aluno executa no \
             Mobile/Watch -> logs retornam ao Supabase -> Web consulta resultados.",
            "Diagrama oficial de arquitetura end-to-end: Not found in repo.",
        ])
        .gap(LIST_GAP);

    doc.heading("Como rodar (mínimo)").bullets([
        "Na raiz do monorepo: npm install",
        "Web: cp web/.env.example web/.env.local e preencher chaves Supabase, OpenAI e outras \
         necessárias.",
        "Banco: executar pelo menos supabase/migrations/001_initial_schema.sql no SQL Editor do \
         Supabase (conforme web/README.md).",
        "Subir Web: npm run web (atalho para npm run dev --workspace=web).",
        "Mobile: criar mobile/.env com EXPO_PUBLIC_SUPABASE_URL e \
         EXPO_PUBLIC_SUPABASE_ANON_KEY; depois npm run mobile.",
        "Guia único oficial para bootstrap completo (web + mobile + todas as migrações): Not \
         found in repo.",
    ]);

    doc
}
