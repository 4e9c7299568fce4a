use super::ConnectionRule;

const fn rule(source: &'static str, target: &'static str, label: &'static str) -> ConnectionRule {
    ConnectionRule {
        source,
        target,
        label,
    }
}

pub(crate) const CONNECTION_RULES: &[ConnectionRule] = &[
    // Web and function workloads
    rule("AppService", "SQLDatabase", "Database"),
    rule("AppService", "CosmosDB", "Database"),
    rule("AppService", "Redis", "Cache"),
    rule("AppService", "KeyVault", "Secrets"),
    rule("AppService", "StorageAccount", "Storage"),
    rule("AppService", "BlobStorage", "Blobs"),
    rule("AppService", "ApplicationInsights", "Telemetry"),
    rule("FunctionApp", "SQLDatabase", "Database"),
    rule("FunctionApp", "CosmosDB", "Database"),
    rule("FunctionApp", "KeyVault", "Secrets"),
    rule("FunctionApp", "StorageAccount", "Storage"),
    rule("FunctionApp", "ServiceBus", "Messages"),
    rule("FunctionApp", "EventHub", "Events"),
    rule("FunctionApp", "EventGrid", "Events"),
    rule("FunctionApp", "ApplicationInsights", "Telemetry"),
    // Kubernetes
    rule("AKS", "ACR", "Pull Images"),
    rule("AKS", "KeyVault", "Secrets"),
    rule("AKS", "SQLDatabase", "Database"),
    rule("AKS", "CosmosDB", "Database"),
    rule("AKS", "ApplicationInsights", "Telemetry"),
    // Ingress
    rule("APIM", "AppService", "Backend"),
    rule("APIM", "FunctionApp", "Backend"),
    rule("APIM", "AKS", "Backend"),
    rule("ApplicationGateway", "AppService", "Route"),
    rule("ApplicationGateway", "AKS", "Route"),
    rule("FrontDoor", "AppService", "Origin"),
    rule("FrontDoor", "ApplicationGateway", "Origin"),
    rule("LoadBalancer", "VM", "Balance"),
    rule("LoadBalancer", "VMSS", "Balance"),
    // Private networking
    rule("PrivateEndpoint", "SQLDatabase", "Private Link"),
    rule("PrivateEndpoint", "StorageAccount", "Private Link"),
    rule("PrivateEndpoint", "KeyVault", "Private Link"),
    rule("PrivateEndpoint", "CosmosDB", "Private Link"),
    // Integration and analytics
    rule("LogicApp", "ServiceBus", "Messages"),
    rule("LogicApp", "EventGrid", "Events"),
    rule("DataFactory", "SQLDatabase", "Source/Sink"),
    rule("DataFactory", "BlobStorage", "Source/Sink"),
    rule("DataFactory", "Synapse", "Analytics"),
    rule("StreamAnalytics", "EventHub", "Input"),
    rule("StreamAnalytics", "IoTHub", "Input"),
    rule("StreamAnalytics", "CosmosDB", "Output"),
    rule("StreamAnalytics", "SQLDatabase", "Output"),
];
