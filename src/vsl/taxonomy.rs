//! The compiled-in script template: step and section titles, accent colors,
//! and the suggested phrase options for each slide.
//!
//! Editing this file is how the template changes. Every count below is a
//! constant so the grid shape and all derived sizes stay in one place.

use std::sync::OnceLock;

use serde::Serialize;

use crate::vsl::slide::SlideId;

pub const STEPS: u8 = 5;
pub const SECTIONS_PER_STEP: u8 = 2;
pub const SLIDES_PER_SECTION: u8 = 3;
pub const SLIDES_PER_STEP: u8 = SECTIONS_PER_STEP * SLIDES_PER_SECTION;
pub const TOTAL_SLIDES: u8 = STEPS * SLIDES_PER_STEP;

pub const STEP_TITLES: [&str; STEPS as usize] = [
    "A Sugestão Snap",
    "A Conexão Vital",
    "O Grande Problema",
    "A Grande Solução",
    "A Grande Oferta",
];

/// Accent color token per step, matched by the stylesheet.
pub const STEP_COLORS: [&str; STEPS as usize] = ["blue", "indigo", "purple", "pink", "rose"];

pub const SECTION_TITLES: [[&str; SECTIONS_PER_STEP as usize]; STEPS as usize] = [
    ["Quebra de Padrão", "Sua Grande Promessa"],
    ["Introdução Modesta", "A História do Pesadelo"],
    ["Visão Geral", "Transição para a Grande Mentira"],
    ["Abertura de Loop de Dicas", "Resumo da Fórmula de Dicas"],
    ["O Produto", "O Preço"],
];

/// Phrase options per slide, indexed by reading-order position minus one.
const PHRASE_OPTIONS: [&[&str]; TOTAL_SLIDES as usize] = [
    // slide-1-1-1
    &[
        "Oi, meu nome é (SEU NOME OU NOME DA TERCEIRA PESSOA FAZENDO O VÍDEO) e essa é uma (IMAGEM DE INTERRUPÇÃO)...?",
        "Oi, meu nome é (SEU NOME OU NOME DA TERCEIRA PESSOA FAZENDO O VÍDEO) e sem essa (IMAGEM DE INTERRUPÇÃO), você não tem chance alguma de conseguir/ter/conquistar (OBJETIVO)...",
        "Meu nome é (SEU NOME OU NOME DA TERCEIRA PESSOA FAZENDO O VÍDEO) e o que você está enxergando nesse exato instante é uma (IMAGEM DE INTERRUPÇÃO)... estranho não?",
    ],
    // slide-1-1-2
    &[
        "Em apenas alguns minutos você vai descobrir porque essa (IMAGEM) é o SEGREDO para que você possa (OBJETIVO)...",
        "Eu já vou explicar o que isso significa logo logo...",
        "Curioso? Então não se preocupe que tudo vai fazer sentido daqui a pouco...",
        "Bom, acredite ou não, essa (IMAGEM DE INTERRUPÇÃO) contém o segredo para que você consiga finalmente (OBJETIVO)...",
    ],
    // slide-1-1-3
    &[
        "O segredo que a indústria de [área] não quer que você saiba.",
        "Após [número] anos de pesquisa, finalmente descobrimos a solução para [problema].",
        "Esta informação é tão poderosa que pode [benefício transformador].",
    ],
    // slide-1-2-1
    &[
        "Meu nome é [Nome] e sou especialista em [área] há mais de [número] anos.",
        "Como fundador da [empresa/método], já ajudei mais de [número] pessoas a [benefício].",
        "Nosso método exclusivo já foi validado por [especialistas/instituições respeitadas].",
    ],
    // slide-1-2-2
    &[
        "Antes de criar este método, eu também sofria com [problema comum].",
        "Nossa equipe de especialistas trabalhou por [tempo] para desenvolver esta solução.",
        "Os resultados que obtivemos com [número] clientes comprovam a eficácia deste sistema.",
    ],
    // slide-1-2-3
    &[
        "Fomos reconhecidos por [publicação/organização] como líderes em [área/solução].",
        "Nossa taxa de sucesso de [percentual]% supera qualquer outra solução disponível no mercado.",
        "O método que você vai conhecer hoje é baseado em [ciência/tecnologia/princípio] avançado.",
    ],
    // slide-2-1-1
    &[
        "A cada dia que passa sem resolver [problema], você perde [benefício/oportunidade].",
        "Muitas pessoas gastam anos tentando solucionar [problema] com métodos ultrapassados.",
        "O custo emocional de continuar enfrentando [problema] pode ser devastador.",
    ],
    // slide-2-1-2
    &[
        "Imagino que você já tenha tentado [soluções comuns] sem obter resultados satisfatórios.",
        "A frustração de investir tempo e dinheiro em soluções que não funcionam é enorme.",
        "Sentir-se preso a [problema] pode afetar sua autoestima e qualidade de vida.",
    ],
    // slide-2-1-3
    &[
        "O ciclo vicioso de [problema recorrente] drena sua energia e motivação.",
        "Muitos desistem de seus sonhos porque não conseguem superar [obstáculo].",
        "A sensação de impotência diante de [problema] é algo que ninguém merece sentir.",
    ],
    // slide-2-2-1
    &[
        "Se você não resolver [problema] agora, em [tempo futuro] a situação pode piorar significativamente.",
        "Estudos mostram que [problema não resolvido] pode levar a [consequência grave].",
        "Ignorar [problema] hoje pode custar [valor/recurso] no futuro.",
    ],
    // slide-2-2-2
    &[
        "As estatísticas mostram que [percentual]% das pessoas que não resolvem [problema] acabam enfrentando [consequência].",
        "Sem uma solução eficaz, [problema] tende a se agravar e afetar outras áreas da sua vida.",
        "O impacto financeiro de não resolver [problema] pode chegar a [valor] por ano.",
    ],
    // slide-2-2-3
    &[
        "A longo prazo, [problema] pode comprometer sua [saúde/relacionamentos/finanças/etc.].",
        "A maioria das pessoas só percebe a gravidade de [problema] quando já é tarde demais.",
        "Continuar no mesmo caminho levará inevitavelmente a [consequência negativa].",
    ],
    // slide-3-1-1
    &[
        "Apresento a você [nome do produto/método], a solução definitiva para [problema principal].",
        "Depois de anos de pesquisa, desenvolvemos [nome do produto/método] para eliminar [problema] de uma vez por todas.",
        "O revolucionário [nome do produto/método] foi criado especificamente para pessoas que enfrentam [problema].",
    ],
    // slide-3-1-2
    &[
        "O segredo do [nome do produto/método] está na sua abordagem [característica única].",
        "Ao contrário de outros métodos, [nome do produto/método] ataca a raiz do problema, não apenas os sintomas.",
        "A tecnologia exclusiva por trás do [nome do produto/método] torna-o 3x mais eficaz que alternativas convencionais.",
    ],
    // slide-3-1-3
    &[
        "O [nome do produto/método] é o resultado de [número] anos de testes e aperfeiçoamentos.",
        "Nossa solução patenteada elimina [problema] através de um processo em [número] etapas.",
        "Desenvolvemos o [nome do produto/método] com base nos mais recentes avanços em [ciência/tecnologia].",
    ],
    // slide-3-2-1
    &[
        "Com [nome do produto/método], você poderá [benefício principal] em apenas [tempo curto].",
        "Nossos usuários relatam [benefício mensurável] após apenas [período curto] de uso.",
        "O primeiro benefício que você vai notar é [transformação imediata].",
    ],
    // slide-3-2-2
    &[
        "Imagine acordar todos os dias sentindo [emoção positiva] em vez de [emoção negativa].",
        "Você finalmente poderá [realizar desejo] sem se preocupar com [problema atual].",
        "A liberdade de viver sem [problema] vai transformar completamente sua qualidade de vida.",
    ],
    // slide-3-2-3
    &[
        "Nossos clientes experimentam [benefício específico] em [tempo] ou menos.",
        "O [nome do produto/método] não apenas resolve [problema], mas também melhora [área relacionada].",
        "O impacto positivo em sua [área da vida] será imediato e duradouro.",
    ],
    // slide-4-1-1
    &[
        "O [nome do produto/método] inclui [número] módulos completos sobre [tópicos principais].",
        "Nossa plataforma intuitiva permite que você [funcionalidade principal] com apenas alguns cliques.",
        "Cada aspecto do [nome do produto/método] foi projetado para [benefício de uso].",
    ],
    // slide-4-1-2
    &[
        "O sistema está estruturado em [formato/estrutura] para garantir resultados progressivos e consistentes.",
        "Você terá acesso a [recurso exclusivo] que facilita [processo/objetivo].",
        "Nossa interface [característica] torna o processo simples mesmo para quem nunca [experiência prévia].",
    ],
    // slide-4-1-3
    &[
        "Incluímos ferramentas de [funcionalidade especial] para acelerar seus resultados.",
        "O recurso de [funcionalidade] permite que você [benefício específico] sem esforço.",
        "Nosso sistema de [funcionalidade técnica] automatiza completamente o processo de [tarefa].",
    ],
    // slide-4-2-1
    &[
        "Ao contrário de outros produtos, [nome do produto/método] oferece [vantagem exclusiva].",
        "Nossa solução é a única no mercado que garante [resultado específico].",
        "O que diferencia [nome do produto/método] é sua capacidade de [funcionalidade única].",
    ],
    // slide-4-2-2
    &[
        "Enquanto concorrentes prometem [benefício comum], nós entregamos [benefício superior].",
        "Nossa tecnologia proprietária supera os métodos tradicionais em [percentual]%.",
        "Somos os únicos que oferecem [garantia/recurso exclusivo] no mercado atual.",
    ],
    // slide-4-2-3
    &[
        "O [nome do produto/método] foi eleito [reconhecimento] por [entidade respeitada].",
        "Nenhum outro sistema consegue [resultado específico] no mesmo período de tempo.",
        "Nossa abordagem [característica] nos coloca anos à frente da concorrência.",
    ],
    // slide-5-1-1
    &[
        "Hoje você pode adquirir o [nome do produto/método] completo por apenas [preço com desconto].",
        "O investimento normal de [preço original] está com [percentual]% de desconto apenas neste lançamento.",
        "Por tempo limitado, oferecemos [condição especial] para novos clientes.",
    ],
    // slide-5-1-2
    &[
        "Além do programa principal, você receberá [número] bônus exclusivos no valor de [valor total].",
        "O primeiro bônus é [nome do bônus 1], que sozinho vale [valor] e vai ajudar você a [benefício].",
        "Incluímos também [bônus especial] que não está disponível para compra separadamente.",
    ],
    // slide-5-1-3
    &[
        "O valor total de tudo o que você recebe hoje ultrapassa [valor], mas seu investimento é apenas [preço final].",
        "Dividimos em até [número] parcelas para facilitar seu acesso a esta solução transformadora.",
        "Considerando o [retorno esperado], este investimento se paga em menos de [tempo curto].",
    ],
    // slide-5-2-1
    &[
        "Esta oferta especial estará disponível apenas pelos próximos [tempo limite].",
        "Apenas [número limitado] vagas estão disponíveis nesta condição especial.",
        "Os primeiros [número] compradores receberão [bônus exclusivo] gratuitamente.",
    ],
    // slide-5-2-2
    &[
        "Após [data/evento], o preço voltará ao valor normal de [preço original].",
        "Esta é uma oportunidade única que não se repetirá no futuro próximo.",
        "O acesso ao [bônus especial] será encerrado em [tempo curto].",
    ],
    // slide-5-2-3
    &[
        "Não deixe que [problema] continue controlando sua vida por mais um dia sequer.",
        "Imagine como será sua vida daqui a [tempo futuro] se você tomar esta decisão agora.",
        "Clique no botão abaixo agora mesmo e transforme sua realidade para sempre.",
    ],
];

/// Suggested phrases for one slide.
pub fn phrases(id: SlideId) -> &'static [&'static str] {
    PHRASE_OPTIONS[id.position() - 1]
}

pub fn step_title(id: SlideId) -> &'static str {
    STEP_TITLES[id.step() as usize - 1]
}

pub fn step_color(id: SlideId) -> &'static str {
    STEP_COLORS[id.step() as usize - 1]
}

pub fn section_title(id: SlideId) -> &'static str {
    SECTION_TITLES[id.step() as usize - 1][id.section() as usize - 1]
}

#[derive(Debug, Clone, Serialize)]
pub struct StepNode {
    pub number: u8,
    pub title: &'static str,
    pub color: &'static str,
    pub sections: Vec<SectionNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionNode {
    pub number: u8,
    pub title: &'static str,
    pub slides: Vec<SlideNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlideNode {
    /// Canonical identifier text, e.g. `slide-2-1-3`.
    pub id: String,
    pub number: u8,
    pub title: String,
    pub phrases: &'static [&'static str],
}

/// The full step/section/slide tree, built once on first use.
pub fn outline() -> &'static [StepNode] {
    static OUTLINE: OnceLock<Vec<StepNode>> = OnceLock::new();
    OUTLINE.get_or_init(|| {
        (1..=STEPS)
            .map(|step| StepNode {
                number: step,
                title: STEP_TITLES[step as usize - 1],
                color: STEP_COLORS[step as usize - 1],
                sections: (1..=SECTIONS_PER_STEP)
                    .map(|section| SectionNode {
                        number: section,
                        title: SECTION_TITLES[step as usize - 1][section as usize - 1],
                        slides: (1..=SLIDES_PER_SECTION)
                            .map(|slide| {
                                let id = SlideId::from_parts(step, section, slide);
                                SlideNode {
                                    id: id.to_string(),
                                    number: slide,
                                    title: format!("Slide {slide}"),
                                    phrases: phrases(id),
                                }
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_counts_line_up() {
        assert_eq!(TOTAL_SLIDES, 30);
        assert_eq!(SLIDES_PER_STEP, 6);
        assert_eq!(SlideId::all().count(), TOTAL_SLIDES as usize);
    }

    #[test]
    fn every_slide_has_phrases() {
        for id in SlideId::all() {
            let options = phrases(id);
            assert!(!options.is_empty(), "{id} has no phrase options");
            for phrase in options {
                assert!(!phrase.trim().is_empty(), "{id} has a blank phrase");
            }
        }
    }

    #[test]
    fn phrases_follow_reading_order() {
        let opening: SlideId = "slide-1-1-1".parse().unwrap();
        assert!(phrases(opening)[0].starts_with("Oi, meu nome é"));

        let closing: SlideId = "slide-5-2-3".parse().unwrap();
        assert!(phrases(closing)[2].starts_with("Clique no botão"));
    }

    #[test]
    fn outline_shape_matches_template() {
        let tree = outline();
        assert_eq!(tree.len(), STEPS as usize);
        let mut seen = 0;
        for (i, step) in tree.iter().enumerate() {
            assert_eq!(step.number as usize, i + 1);
            assert_eq!(step.title, STEP_TITLES[i]);
            assert_eq!(step.sections.len(), SECTIONS_PER_STEP as usize);
            for section in &step.sections {
                assert_eq!(section.slides.len(), SLIDES_PER_SECTION as usize);
                seen += section.slides.len();
            }
        }
        assert_eq!(seen, TOTAL_SLIDES as usize);
    }

    #[test]
    fn outline_ids_are_canonical() {
        let tree = outline();
        let mut flat = Vec::new();
        for step in tree {
            for section in &step.sections {
                for slide in &section.slides {
                    flat.push(slide.id.clone());
                }
            }
        }
        let expected: Vec<String> = SlideId::all().map(|id| id.to_string()).collect();
        assert_eq!(flat, expected);
    }

    #[test]
    fn titles_resolve_for_every_slide() {
        for id in SlideId::all() {
            assert!(!step_title(id).is_empty());
            assert!(!section_title(id).is_empty());
            assert!(!step_color(id).is_empty());
        }
    }
}
