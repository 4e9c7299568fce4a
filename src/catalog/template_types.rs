//! Bicep / ARM resource type paths, lower-cased, without API version.

pub(crate) const TEMPLATE_TYPES: &[(&str, &str)] = &[
    // Compute
    ("microsoft.compute/virtualmachines", "VM"),
    ("microsoft.compute/virtualmachinescalesets", "VMSS"),
    ("microsoft.web/sites", "AppService"),
    ("microsoft.web/serverfarms", "AppServicePlan"),
    ("microsoft.containerservice/managedclusters", "AKS"),
    ("microsoft.containerinstance/containergroups", "ContainerInstances"),
    ("microsoft.containerregistry/registries", "ACR"),
    ("microsoft.app/containerapps", "ContainerApps"),
    ("microsoft.batch/batchaccounts", "Batch"),
    ("microsoft.web/sites/functions", "FunctionApp"),
    // Networking
    ("microsoft.network/virtualnetworks", "VNet"),
    ("microsoft.network/virtualnetworks/subnets", "Subnet"),
    ("microsoft.network/loadbalancers", "LoadBalancer"),
    ("microsoft.network/applicationgateways", "ApplicationGateway"),
    ("microsoft.network/frontdoors", "FrontDoor"),
    ("microsoft.cdn/profiles", "CDN"),
    ("microsoft.network/azurefirewalls", "Firewall"),
    ("microsoft.network/virtualnetworkgateways", "VPNGateway"),
    ("microsoft.network/expressroutecircuits", "ExpressRoute"),
    ("microsoft.network/bastionhosts", "Bastion"),
    ("microsoft.network/privatednszones", "PrivateDNS"),
    ("microsoft.network/privateendpoints", "PrivateEndpoint"),
    ("microsoft.network/networksecuritygroups", "NSG"),
    ("microsoft.network/publicipaddresses", "PublicIP"),
    ("microsoft.network/trafficmanagerprofiles", "TrafficManager"),
    ("microsoft.network/dnszones", "DNS"),
    // Storage
    ("microsoft.storage/storageaccounts", "StorageAccount"),
    ("microsoft.storage/storageaccounts/blobservices", "BlobStorage"),
    ("microsoft.storage/storageaccounts/fileservices", "FileStorage"),
    ("microsoft.datalakestore/accounts", "DataLake"),
    ("microsoft.compute/disks", "ManagedDisk"),
    // Databases
    ("microsoft.sql/servers", "SQLServer"),
    ("microsoft.sql/servers/databases", "SQLDatabase"),
    ("microsoft.documentdb/databaseaccounts", "CosmosDB"),
    ("microsoft.cache/redis", "Redis"),
    ("microsoft.dbformysql/servers", "MySQL"),
    ("microsoft.dbformysql/flexibleservers", "MySQL"),
    ("microsoft.dbforpostgresql/servers", "PostgreSQL"),
    ("microsoft.dbforpostgresql/flexibleservers", "PostgreSQL"),
    ("microsoft.synapse/workspaces", "Synapse"),
    // Integration
    ("microsoft.servicebus/namespaces", "ServiceBus"),
    ("microsoft.eventhub/namespaces", "EventHub"),
    ("microsoft.eventgrid/topics", "EventGrid"),
    ("microsoft.eventgrid/systemtopics", "EventGrid"),
    ("microsoft.logic/workflows", "LogicApp"),
    ("microsoft.datafactory/factories", "DataFactory"),
    ("microsoft.apimanagement/service", "APIM"),
    ("microsoft.signalrservice/signalr", "SignalR"),
    // Security
    ("microsoft.keyvault/vaults", "KeyVault"),
    ("microsoft.managedidentity/userassignedidentities", "ManagedIdentity"),
    // AI / ML
    ("microsoft.cognitiveservices/accounts", "CognitiveServices"),
    ("microsoft.machinelearningservices/workspaces", "MachineLearning"),
    ("microsoft.search/searchservices", "AISearch"),
    ("microsoft.botservice/botservices", "BotService"),
    // Analytics
    ("microsoft.databricks/workspaces", "Databricks"),
    ("microsoft.streamanalytics/streamingjobs", "StreamAnalytics"),
    ("microsoft.hdinsight/clusters", "HDInsight"),
    // Monitoring
    ("microsoft.insights/components", "ApplicationInsights"),
    ("microsoft.operationalinsights/workspaces", "LogAnalytics"),
    ("microsoft.insights/actiongroups", "Monitor"),
    // IoT
    ("microsoft.devices/iothubs", "IoTHub"),
    ("microsoft.iotcentral/iotapps", "IoTCentral"),
    ("microsoft.digitaltwins/digitaltwinsinstances", "DigitalTwins"),
];
