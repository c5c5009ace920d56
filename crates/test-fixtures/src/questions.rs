use examkit_core::models::{Category, Difficulty, Question, QuestionId};

use crate::bank::InMemoryQuestionBank;

fn q(
    category: Category,
    seq: u32,
    difficulty: u8,
    text: &str,
    answer: &str,
    keywords: &[&str],
) -> Question {
    Question::new(QuestionId::new(category, seq), text, answer)
        .with_difficulty(Difficulty::new(difficulty).unwrap())
        .with_keywords(keywords)
}

/// The deadlock question used across grading and keyword tests.
pub fn deadlock_question() -> Question {
    q(
        Category::Os,
        1,
        3,
        "교착상태(Deadlock)란 무엇인가?",
        "두 개 이상의 프로세스가 서로가 점유한 자원을 기다리며 무한히 대기하는 상태",
        &["교착상태", "프로세스", "자원", "대기"],
    )
}

/// A small bank spanning several categories.
pub fn sample_questions() -> Vec<Question> {
    vec![
        deadlock_question(),
        q(
            Category::Os,
            2,
            3,
            "교착상태 발생의 4가지 필요조건을 쓰시오.",
            "상호배제, 점유대기, 비선점, 순환대기",
            &["교착상태", "상호배제", "점유대기", "비선점", "순환대기"],
        ),
        q(
            Category::Os,
            3,
            2,
            "세마포어(Semaphore)의 역할은?",
            "공유 자원에 대한 프로세스의 접근을 제어하는 동기화 도구",
            &["세마포어", "동기화", "자원", "프로세스"],
        ),
        q(
            Category::Os,
            4,
            4,
            "교착상태 회피 기법의 대표적인 알고리즘은?",
            "은행원 알고리즘",
            &["교착상태", "회피", "은행원 알고리즘"],
        ),
        q(
            Category::Os,
            5,
            1,
            "페이지 교체 알고리즘 중 가장 오랫동안 사용되지 않은 페이지를 교체하는 방식의 영문 약어는?",
            "LRU",
            &["페이지 교체", "lru"],
        ),
        q(
            Category::Db,
            1,
            3,
            "트랜잭션의 4가지 특성을 쓰시오.",
            "원자성, 일관성, 고립성, 지속성",
            &["트랜잭션", "원자성", "일관성", "고립성", "지속성"],
        ),
        q(
            Category::Db,
            2,
            4,
            "데이터베이스에서 교착상태를 탐지하기 위해 사용하는 그래프는?",
            "대기 그래프(Wait-for Graph)",
            &["교착상태", "대기 그래프", "트랜잭션"],
        ),
        q(
            Category::Network,
            1,
            2,
            "전송 계층의 연결 지향 프로토콜은?",
            "TCP",
            &["tcp", "전송 계층", "프로토콜"],
        ),
        q(
            Category::Algorithm,
            1,
            3,
            "자원 할당 그래프에서 사이클을 탐지하는 알고리즘은?",
            "깊이 우선 탐색(DFS)",
            &["dfs", "사이클", "자원", "그래프"],
        ),
        q(
            Category::Program,
            1,
            5,
            "멀티스레드 프로그램에서 뮤텍스 잠금 순서를 고정하는 이유는?",
            "순환대기를 방지하여 교착상태를 예방하기 위해",
            &["뮤텍스", "순환대기", "교착상태", "스레드"],
        ),
    ]
    .into_iter()
    .chain(std::iter::once(
        q(
            Category::Network,
            2,
            2,
            "OSI 7계층에서 라우팅을 담당하는 계층은?",
            "3",
            &["osi", "라우팅", "네트워크 계층"],
        )
        .with_example("1. 물리 계층\n2. 데이터링크 계층\n3. 네트워크 계층\n4. 전송 계층"),
    ))
    .collect()
}

pub fn sample_bank() -> InMemoryQuestionBank {
    InMemoryQuestionBank::new(sample_questions())
}
