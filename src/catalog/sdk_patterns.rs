//! Evidence of Azure services in application code.
//!
//! Matching is existence-based per kind, so entry order carries no priority.

pub(crate) const SDK_PATTERNS: &[(&str, &str)] = &[
    // Client types (.NET, Python, JS/TS, Java)
    (r"BlobServiceClient|BlobContainerClient", "BlobStorage"),
    (r"BlobServiceClient|ContainerClient", "BlobStorage"),
    (r"CosmosClient|CosmosDatabase", "CosmosDB"),
    (r"KeyVaultClient|SecretClient|KeyClient", "KeyVault"),
    (r"SecretClient|KeyClient|CertificateClient", "KeyVault"),
    (r"ServiceBusClient|ServiceBusSender", "ServiceBus"),
    (r"EventHubProducerClient|EventHubConsumerClient", "EventHub"),
    (r"SearchClient|SearchIndexClient", "AISearch"),
    (r"OpenAIClient|ChatCompletionsClient", "AzureOpenAI"),
    (r"AzureOpenAI|AsyncAzureOpenAI", "AzureOpenAI"),
    (r"SqlConnection.*\.database\.windows\.net", "SQLDatabase"),
    (r"RedisConnection|StackExchange\.Redis", "Redis"),
    (r"TableServiceClient|TableClient", "TableStorage"),
    (r"QueueServiceClient|QueueClient", "QueueStorage"),
    // Connection strings and service hostnames
    (r"AccountName=\w+;.*BlobEndpoint", "StorageAccount"),
    (r"\.blob\.core\.windows\.net", "BlobStorage"),
    (r"\.table\.core\.windows\.net", "TableStorage"),
    (r"\.queue\.core\.windows\.net", "QueueStorage"),
    (r"\.servicebus\.windows\.net", "ServiceBus"),
    (r"\.documents\.azure\.com", "CosmosDB"),
    (r"\.vault\.azure\.net", "KeyVault"),
    (r"\.database\.windows\.net", "SQLDatabase"),
    (r"\.redis\.cache\.windows\.net", "Redis"),
    (r"\.search\.windows\.net", "AISearch"),
    (r"\.openai\.azure\.com", "AzureOpenAI"),
    (r"\.cognitiveservices\.azure\.com", "CognitiveServices"),
    (r"\.signalr\.net", "SignalR"),
    (r"\.azurewebsites\.net", "AppService"),
    (r"\.azurecr\.io", "ACR"),
];
