// 集成测试公共模块
//
// 提供测试辅助工具和共享功能

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use lyview::translation::error::{TranslationError, TranslationResult};
use lyview::translation::provider::ExternalTranslationClient;
use lyview::translation::storage::{StaticDictionary, TranslationCache};
use lyview::translation::TranslationResolver;

/// 外部翻译服务的响应方式
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// 按给定表翻译，表外的文本加上 `EN:` 前缀
    Table(Vec<(String, String)>),
    /// 每次都失败
    Fail(TranslationError),
    /// 返回固定结果，不管请求多少条
    Fixed(Vec<String>),
}

/// 记录每次调用的外部翻译客户端
pub struct MockClient {
    behavior: MockBehavior,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockClient {
    pub fn new(behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn with_table(entries: &[(&str, &str)]) -> Arc<Self> {
        Self::new(MockBehavior::Table(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    pub fn failing(error: TranslationError) -> Arc<Self> {
        Self::new(MockBehavior::Fail(error))
    }

    pub fn fixed(results: &[&str]) -> Arc<Self> {
        Self::new(MockBehavior::Fixed(results.iter().map(|s| s.to_string()).collect()))
    }

    /// 所有调用的请求内容
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ExternalTranslationClient for MockClient {
    async fn translate_batch(
        &self,
        texts: &[String],
        _source_lang: &str,
        _target_lang: &str,
    ) -> TranslationResult<Vec<String>> {
        self.calls.lock().unwrap().push(texts.to_vec());

        match &self.behavior {
            MockBehavior::Table(table) => Ok(texts
                .iter()
                .map(|text| {
                    table
                        .iter()
                        .find(|(source, _)| source == text)
                        .map(|(_, target)| target.clone())
                        .unwrap_or_else(|| format!("EN:{}", text))
                })
                .collect()),
            MockBehavior::Fail(error) => Err(error.clone()),
            MockBehavior::Fixed(results) => Ok(results.clone()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// 测试环境构建器
pub struct TestConfigBuilder {
    capacity: usize,
    client: Option<Arc<MockClient>>,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            capacity: 100,
            client: None,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_client(mut self, client: Arc<MockClient>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> TestEnvironment {
        let resolver = TranslationResolver::new(
            StaticDictionary::new(),
            TranslationCache::with_capacity(self.capacity),
        );
        let resolver = match &self.client {
            Some(client) => resolver.with_client(client.clone()),
            None => resolver,
        };

        TestEnvironment {
            resolver,
            client: self.client,
        }
    }
}

/// 测试环境
pub struct TestEnvironment {
    pub resolver: TranslationResolver,
    pub client: Option<Arc<MockClient>>,
}

impl TestEnvironment {
    /// 没有外部翻译服务的默认环境
    pub fn default() -> Self {
        TestConfigBuilder::new().build()
    }

    pub fn external_calls(&self) -> usize {
        self.client.as_ref().map_or(0, |client| client.call_count())
    }
}

/// 上游原始记录样本
pub struct TestDataGenerator;

impl TestDataGenerator {
    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    pub fn raw_legislator() -> Map<String, Value> {
        Self::object(json!({
            "屆": 11,
            "委員姓名": "林美玲",
            "委員英文姓名": "Lin Mei-ling",
            "性別": "女",
            "黨籍": "民主進步黨",
            "黨團": "民主進步黨",
            "選區名稱": "高雄市第3選舉區",
            "委員會": ["經濟委員會"],
            "學歷": ["國立中山大學企業管理碩士"],
            "經歷": "高雄市議員",
            "是否離職": "否",
            "歷屆立法委員編號": 4321
        }))
    }

    pub fn raw_bill() -> Map<String, Value> {
        Self::object(json!({
            "屆": 11,
            "議案編號": "202110054321",
            "議案名稱": "電業法修正草案",
            "提案單位/提案委員": "行政院",
            "議案狀態": "交付審查",
            "議案類別": "法律案",
            "提案來源": "政府提案",
            "法律編號:str": "電業法",
            "相關附件": [{"網址": "https://example.org/1.pdf", "名稱": "關係文書"}]
        }))
    }

    pub fn raw_committee() -> Map<String, Value> {
        Self::object(json!({
            "委員會代號": 19,
            "委員會名稱": "經濟委員會",
            "委員會職掌": "審查經濟部主管議案",
            "委員會類別": 1,
            "委員會類別:str": "常設委員會"
        }))
    }

    pub fn raw_interpellation() -> Map<String, Value> {
        Self::object(json!({
            "屆": 11,
            "質詢委員": ["林美玲"],
            "事由": "就電價調整提出質詢",
            "說明": "請經濟部說明",
            "會議代碼:str": "第11屆第2會期第4次會議",
            "會期": 2
        }))
    }

    /// 一组 ASCII 和空白文本
    pub fn passthrough_texts() -> Vec<String> {
        ["", "   ", "Hello", "2024-01-01", "KMT", "\t"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

/// 断言辅助工具
pub struct AssertionHelper;

impl AssertionHelper {
    /// 输出与输入逐位一一对应
    pub fn assert_same_length(input: &[String], output: &[String]) {
        assert_eq!(
            input.len(),
            output.len(),
            "batch output length {} does not match input length {}",
            output.len(),
            input.len()
        );
    }

    pub fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }
}
